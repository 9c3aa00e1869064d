//! Dense terrain grids and their shared memory layout

pub mod height;
pub mod weight;

pub use height::HeightGrid;
pub use weight::WeightGrid;

/// Tolerance for the per-cell weight-sum invariant
pub const WEIGHT_SUM_TOLERANCE: f32 = 1e-4;

/// Flat index of cell `(x, z)` in a row-major `width x height` grid.
///
/// Rows run along the z axis, columns along x. Every component that touches
/// grid memory (accessors, brush window iteration, the persistence codec)
/// goes through this function and [`weight_index`] so the axis convention
/// exists in exactly one place.
#[inline]
pub fn cell_index(x: usize, z: usize, width: usize) -> usize {
    z * width + x
}

/// Flat index of `(x, z, layer)` in a `width x height x layers` weight grid.
///
/// Layers are interleaved per cell: all layer values of a cell are adjacent,
/// cells follow the same row-major order as [`cell_index`].
#[inline]
pub fn weight_index(x: usize, z: usize, layer: usize, width: usize, layers: usize) -> usize {
    cell_index(x, z, width) * layers + layer
}
