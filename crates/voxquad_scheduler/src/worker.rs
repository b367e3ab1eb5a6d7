//! Worker thread main loop.

use std::time::Instant;

use voxquad_mesher::GreedyMesher;

use crate::job::MeshResult;
use crate::scheduler::Shared;

/// Meshes jobs in queue order until the job queue is closed.
pub(crate) fn run<T>(shared: &Shared<T>) {
    let mut mesher = GreedyMesher::new();
    tracing::debug!("mesh worker started");

    while let Some(job) = shared.jobs.wait_pop() {
        let start = Instant::now();
        let mesh = mesher.mesh(&job.voxels.as_grid(), job.lod);
        let mesh_time = start.elapsed();

        tracing::trace!(
            "job {} meshed: {} quads in {:?}",
            job.job_id,
            mesh.quad_count(),
            mesh_time
        );

        // Counted before publishing so a poller never sees a result the
        // stats do not include yet
        {
            let mut stats = shared.stats.lock();
            stats.completed += 1;
            stats.total_quads += mesh.quad_count() as u64;
            stats.total_mesh_time += mesh_time;
        }

        shared.results.push(MeshResult {
            job_id: job.job_id,
            token: job.token,
            mesh,
            mesh_time,
        });
    }

    tracing::debug!("mesh worker exiting");
}
