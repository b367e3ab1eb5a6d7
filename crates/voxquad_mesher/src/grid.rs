//! # Voxel Grid
//!
//! Dense occupancy grids stored as one byte per voxel in row-major order:
//! `index = x + size.x * (y + size.y * z)`. Any non-zero byte is solid.
//!
//! Coordinates outside `[0, size)` on any axis read as empty. The mesher
//! relies on this open boundary to close the surface at the grid edges.

use crate::error::{GridError, GridResult};

/// Grid dimensions in voxels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Extent along X.
    pub x: usize,
    /// Extent along Y.
    pub y: usize,
    /// Extent along Z.
    pub z: usize,
}

impl GridSize {
    /// Creates a new grid size.
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Creates a cube of `n` voxels per side.
    #[inline]
    #[must_use]
    pub const fn cube(n: usize) -> Self {
        Self { x: n, y: n, z: n }
    }

    /// Converts signed host dimensions. Any value `<= 0` becomes a zero
    /// extent, which makes the size degenerate.
    #[must_use]
    pub fn from_signed(x: i32, y: i32, z: i32) -> Self {
        let extent = |v: i32| usize::try_from(v).unwrap_or(0);
        Self::new(extent(x), extent(y), extent(z))
    }

    /// Extent along axis `0`, `1` or `2`.
    #[inline]
    #[must_use]
    pub const fn axis(self, axis: usize) -> usize {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Extents as `[x, y, z]`.
    #[inline]
    #[must_use]
    pub const fn as_array(self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }

    /// Total voxel count, saturating on overflow.
    #[inline]
    #[must_use]
    pub const fn volume(self) -> usize {
        self.x.saturating_mul(self.y).saturating_mul(self.z)
    }

    /// True when any extent is zero.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// Linear index of an in-range coordinate.
    #[inline]
    #[must_use]
    pub const fn index(self, x: usize, y: usize, z: usize) -> usize {
        x + self.x * (y + self.y * z)
    }

    /// Returns true if the coordinate lies inside the grid.
    #[inline]
    #[must_use]
    pub const fn contains(self, x: usize, y: usize, z: usize) -> bool {
        x < self.x && y < self.y && z < self.z
    }
}

impl From<[usize; 3]> for GridSize {
    fn from([x, y, z]: [usize; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Read-only view over a caller-owned voxel buffer.
#[derive(Clone, Copy, Debug)]
pub struct VoxelGrid<'a> {
    data: &'a [u8],
    size: GridSize,
}

impl<'a> VoxelGrid<'a> {
    /// Wraps a buffer without validation.
    ///
    /// A short buffer is tolerated: voxels past its end read as empty.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8], size: GridSize) -> Self {
        Self { data, size }
    }

    /// Wraps a buffer, rejecting degenerate sizes and length mismatches.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DegenerateSize`] if any extent is zero, or
    /// [`GridError::LengthMismatch`] if `data.len()` differs from the volume.
    pub fn try_new(data: &'a [u8], size: GridSize) -> GridResult<Self> {
        if size.is_degenerate() {
            return Err(GridError::DegenerateSize {
                x: size.x,
                y: size.y,
                z: size.z,
            });
        }
        if data.len() != size.volume() {
            return Err(GridError::LengthMismatch {
                expected: size.volume(),
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Grid dimensions.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Raw voxel bytes.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// True for an empty buffer or a zero extent. Meshing such a grid
    /// yields an empty mesh.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.data.is_empty() || self.size.is_degenerate()
    }

    /// Solidity at a signed coordinate. Out of range reads as empty.
    #[inline]
    #[must_use]
    pub fn is_solid(&self, pos: [isize; 3]) -> bool {
        let (Ok(x), Ok(y), Ok(z)) = (
            usize::try_from(pos[0]),
            usize::try_from(pos[1]),
            usize::try_from(pos[2]),
        ) else {
            return false;
        };
        if !self.size.contains(x, y, z) {
            return false;
        }
        self.data
            .get(self.size.index(x, y, z))
            .is_some_and(|&v| v != 0)
    }

    /// Copies the grid into an owned buffer.
    #[must_use]
    pub fn to_buffer(&self) -> VoxelBuffer {
        VoxelBuffer::from_slice(self.data, self.size)
    }
}

/// Owned voxel grid.
///
/// Used for job snapshots, so the caller can reuse its own buffer as soon
/// as a submit returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoxelBuffer {
    data: Vec<u8>,
    size: GridSize,
}

impl VoxelBuffer {
    /// Takes ownership of existing voxel bytes.
    #[inline]
    #[must_use]
    pub const fn new(data: Vec<u8>, size: GridSize) -> Self {
        Self { data, size }
    }

    /// Copies voxel bytes from a slice.
    #[must_use]
    pub fn from_slice(data: &[u8], size: GridSize) -> Self {
        Self {
            data: data.to_vec(),
            size,
        }
    }

    /// Creates a grid with every voxel set to `solid`.
    #[must_use]
    pub fn filled(size: GridSize, solid: bool) -> Self {
        Self {
            data: vec![u8::from(solid); size.volume()],
            size,
        }
    }

    /// Sets a voxel.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is outside the
    /// grid or past the end of the buffer.
    pub fn set(&mut self, x: usize, y: usize, z: usize, solid: bool) -> GridResult<()> {
        let slot = if self.size.contains(x, y, z) {
            self.data.get_mut(self.size.index(x, y, z))
        } else {
            None
        };
        let slot = slot.ok_or(GridError::OutOfBounds { x, y, z })?;
        *slot = u8::from(solid);
        Ok(())
    }

    /// Reads a voxel. Out of range reads as empty.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.size.contains(x, y, z)
            && self
                .data
                .get(self.size.index(x, y, z))
                .is_some_and(|&v| v != 0)
    }

    /// Borrows the buffer as a grid view.
    #[inline]
    #[must_use]
    pub fn as_grid(&self) -> VoxelGrid<'_> {
        VoxelGrid::new(&self.data, self.size)
    }

    /// Grid dimensions.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Raw voxel bytes.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the raw bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
