//! # Mesher Error Types
//!
//! Meshing itself cannot fail. These errors only come from the strict grid
//! constructors and setters.

use thiserror::Error;

/// Errors raised by strict voxel grid operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// One or more dimensions is zero.
    #[error("degenerate grid size {x}x{y}x{z}")]
    DegenerateSize {
        /// Extent along X.
        x: usize,
        /// Extent along Y.
        y: usize,
        /// Extent along Z.
        z: usize,
    },

    /// Buffer length does not match the grid volume.
    #[error("voxel buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Volume implied by the grid size.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Coordinate lies outside the grid.
    #[error("voxel ({x}, {y}, {z}) is outside the grid")]
    OutOfBounds {
        /// X coordinate.
        x: usize,
        /// Y coordinate.
        y: usize,
        /// Z coordinate.
        z: usize,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
