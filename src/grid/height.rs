//! 2D elevation grid with normalized heights

use crate::core::error::Error;
use crate::core::types::Result;

use super::cell_index;

/// Dense `width x height` grid of elevation values in `[0, 1]`.
///
/// Mutation goes through [`set`](HeightGrid::set), which clamps, or bulk
/// replacement via [`fill_from`](HeightGrid::fill_from); every cell is in
/// `[0, 1]` after either.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl HeightGrid {
    /// Create a flat zero-elevation grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Rebuild a grid from an already-flattened row-major buffer.
    ///
    /// Values are taken verbatim so a persisted grid restores exactly; the
    /// range invariant is only verified in debug builds. A release-build
    /// caller feeding hand-tampered data carries out-of-range cells until the
    /// next [`set`](HeightGrid::set) clamps them.
    pub fn from_flat(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != width * height {
            return Err(Error::DimensionMismatch {
                expected: format!("{} values ({}x{})", width * height, width, height),
                found: format!("{} values", data.len()),
            });
        }
        #[cfg(debug_assertions)]
        if let Some(value) = data.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(Error::InvariantViolation(format!(
                "elevation {value} outside [0, 1]"
            )));
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, z)` lies inside the grid
    pub fn in_bounds(&self, x: i64, z: i64) -> bool {
        x >= 0 && z >= 0 && (x as usize) < self.width && (z as usize) < self.height
    }

    fn check_bounds(&self, x: usize, z: usize) -> Result<()> {
        if x < self.width && z < self.height {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x: x as i64,
                z: z as i64,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Elevation at `(x, z)`
    pub fn get(&self, x: usize, z: usize) -> Result<f32> {
        self.check_bounds(x, z)?;
        Ok(self.data[cell_index(x, z, self.width)])
    }

    /// Set the elevation at `(x, z)`, clamped to `[0, 1]`
    pub fn set(&mut self, x: usize, z: usize, value: f32) -> Result<()> {
        self.check_bounds(x, z)?;
        self.data[cell_index(x, z, self.width)] = value.clamp(0.0, 1.0);
        Ok(())
    }

    /// Row-major flat view of the grid, for the persistence codec
    pub fn as_flat(&self) -> &[f32] {
        &self.data
    }

    /// Replace all cells from a row-major buffer of matching dimensions
    pub fn fill_from(&mut self, data: &[f32]) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("{} values ({}x{})", self.data.len(), self.width, self.height),
                found: format!("{} values", data.len()),
            });
        }
        self.data.copy_from_slice(data);
        Ok(())
    }
}
