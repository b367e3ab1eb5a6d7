//! # Slice Mask
//!
//! 2D boundary mask for one sweep plane, and the greedy rectangle merge
//! that consumes it.
//!
//! ```text
//!   u ──>                       u ──>
//!   [+][+][+][ ][-]             [A  A  A][ ][B]
//!   [+][+][+][ ][-]     ==>     [A  A  A][ ][B]
//!   [+][+][ ][ ][ ]             [C  C][ ][ ][ ]
//!   v                           v
//! ```
//!
//! Rectangles are discovered in row-major scan order. The width of a run is
//! fixed first, then rows are added while every cell under that width still
//! matches. Ties are resolved by scan order, not by area.

/// Boundary state of one mask cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum MaskCell {
    /// No boundary (both sides solid or both empty).
    #[default]
    Empty = 0,
    /// Solid on the near side: the face looks toward `+d`.
    Front = 1,
    /// Solid on the far side: the face looks toward `-d`.
    Back = -1,
}

impl MaskCell {
    /// Classifies the transition between the voxel at the sweep position
    /// (`near`) and the voxel one step further along the axis (`far`).
    #[inline]
    #[must_use]
    pub const fn from_pair(near: bool, far: bool) -> Self {
        match (near, far) {
            (true, false) => Self::Front,
            (false, true) => Self::Back,
            _ => Self::Empty,
        }
    }

    /// Sign of the face normal along the sweep axis.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Front => 1.0,
            Self::Back => -1.0,
            Self::Empty => 0.0,
        }
    }

    /// True when this cell carries no face.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A maximal same-sign rectangle taken from a mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergedRect {
    /// Column of the top-left cell.
    pub u: usize,
    /// Row of the top-left cell.
    pub v: usize,
    /// Columns covered.
    pub width: usize,
    /// Rows covered.
    pub height: usize,
    /// Orientation shared by every covered cell. Never `Empty`.
    pub cell: MaskCell,
}

/// Reusable `width x height` mask, stored row-major.
#[derive(Clone, Debug, Default)]
pub struct SliceMask {
    cells: Vec<MaskCell>,
    width: usize,
    height: usize,
}

impl SliceMask {
    /// Creates an empty `0 x 0` mask.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cleared mask of the given size.
    #[must_use]
    pub fn with_size(width: usize, height: usize) -> Self {
        let mut mask = Self::new();
        mask.resize(width, height);
        mask
    }

    /// Resizes and clears every cell. Keeps the allocation when shrinking.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, MaskCell::Empty);
    }

    /// Columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Reads a cell.
    ///
    /// # Panics
    ///
    /// Panics if `(u, v)` is outside the mask.
    #[inline]
    #[must_use]
    pub fn get(&self, u: usize, v: usize) -> MaskCell {
        self.cells[u + v * self.width]
    }

    /// Writes a cell.
    ///
    /// # Panics
    ///
    /// Panics if `(u, v)` is outside the mask.
    #[inline]
    pub fn set(&mut self, u: usize, v: usize, cell: MaskCell) {
        self.cells[u + v * self.width] = cell;
    }

    /// True when no cell carries a face.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Extracts every maximal rectangle in scan order, zeroing the cells it
    /// covers. The mask is clear afterwards.
    pub fn drain_rects(&mut self, mut emit: impl FnMut(MergedRect)) {
        let (w, h) = (self.width, self.height);

        for v in 0..h {
            let mut u = 0;
            while u < w {
                let cell = self.get(u, v);
                if cell.is_empty() {
                    u += 1;
                    continue;
                }

                // Widest run along the row
                let mut width = 1;
                while u + width < w && self.get(u + width, v) == cell {
                    width += 1;
                }

                // Add rows while the whole run still matches
                let mut height = 1;
                'rows: while v + height < h {
                    for du in 0..width {
                        if self.get(u + du, v + height) != cell {
                            break 'rows;
                        }
                    }
                    height += 1;
                }

                for dv in 0..height {
                    let row = (v + dv) * w;
                    self.cells[row + u..row + u + width].fill(MaskCell::Empty);
                }

                emit(MergedRect {
                    u,
                    v,
                    width,
                    height,
                    cell,
                });

                u += width;
            }
        }
    }
}
