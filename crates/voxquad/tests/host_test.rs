//! Integration tests for the host entry points.

use std::time::{Duration, Instant};

use voxquad::{build_mesh, AsyncMesher, MeshBuffers, SchedulerConfig};

fn pop_n<T: Send + 'static>(mesher: &AsyncMesher<T>, n: usize) -> Vec<(T, MeshBuffers)> {
    let start = Instant::now();
    let mut done = Vec::with_capacity(n);
    while done.len() < n {
        match mesher.pop_completed() {
            Some(item) => done.push(item),
            None => {
                assert!(start.elapsed() < Duration::from_secs(10), "timed out");
                std::thread::sleep(Duration::from_millis(1));
            }
        }
    }
    done
}

/// Solid floor `height` voxels deep across an `n x n` column.
fn floor(n: usize, height: usize) -> Vec<u8> {
    let mut voxels = vec![0u8; n * n * n];
    for z in 0..n {
        for y in 0..height {
            for x in 0..n {
                voxels[x + n * (y + n * z)] = 1;
            }
        }
    }
    voxels
}

#[test]
fn test_build_mesh_floor() {
    let voxels = floor(8, 3);
    let mesh = build_mesh(&voxels, [8, 8, 8], 0);

    assert_eq!(mesh.quad_count(), 6);
    let bounds = mesh.bounds().unwrap();
    assert_eq!(bounds.max, [8.0, 3.0, 8.0]);
}

#[test]
fn test_build_mesh_rejects_bad_sizes() {
    let voxels = [1u8; 8];
    for size in [[0, 2, 2], [2, -1, 2], [2, 2, i32::MIN]] {
        assert!(build_mesh(&voxels, size, 0).is_empty(), "{size:?}");
    }
    assert!(build_mesh(&[], [2, 2, 2], 0).is_empty());
}

#[test]
fn test_build_mesh_short_buffer_does_not_panic() {
    // Only the first voxel is present; the rest read as air
    let mesh = build_mesh(&[1], [4, 4, 4], 0);
    assert_eq!(mesh.quad_count(), 6);
}

#[test]
fn test_schedule_matches_build() {
    let mesher = AsyncMesher::new().unwrap();
    let voxels = floor(6, 2);

    mesher.schedule_mesh(&voxels, [6, 6, 6], 1, 42u32);
    let (token, mesh) = pop_n(&mesher, 1).remove(0);

    assert_eq!(token, 42);
    assert_eq!(mesh, build_mesh(&voxels, [6, 6, 6], 1));
}

#[test]
fn test_completion_order_follows_schedule_order() {
    let mesher = AsyncMesher::new().unwrap();
    let chunks: Vec<(i32, i32)> = (0..10).map(|i| (i % 3, i / 3)).collect();

    for (i, &chunk) in chunks.iter().enumerate() {
        let voxels = floor(4, i % 4 + 1);
        mesher.schedule_mesh(&voxels, [4, 4, 4], 0, chunk);
    }

    let tokens: Vec<_> = pop_n(&mesher, chunks.len()).into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens, chunks);
}

#[test]
fn test_schedule_after_stop_is_swallowed() {
    let mesher = AsyncMesher::new().unwrap();
    mesher.stop();
    mesher.schedule_mesh(&[1], [1, 1, 1], 0, ());

    std::thread::sleep(Duration::from_millis(10));
    assert!(mesher.pop_completed().is_none());
    assert_eq!(mesher.stats().rejected, 1);
}

#[test]
fn test_degenerate_schedule_still_completes() {
    let mesher = AsyncMesher::new().unwrap();
    mesher.schedule_mesh(&[1, 1], [2, 0, 1], 0, "flat");

    let (token, mesh) = pop_n(&mesher, 1).remove(0);
    assert_eq!(token, "flat");
    assert!(mesh.is_empty());
}

#[test]
fn test_custom_config() {
    let config = SchedulerConfig {
        worker_name: "host-mesher".to_string(),
        ..SchedulerConfig::streaming()
    };
    let mesher = AsyncMesher::<u8>::with_config(config).unwrap();

    assert_eq!(mesher.scheduler().config().worker_name, "host-mesher");
    assert_eq!(mesher.scheduler().config().max_pending_jobs, 1024);
    assert!(mesher.scheduler().is_running());
}
