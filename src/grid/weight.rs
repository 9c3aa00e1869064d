//! 3D material-weight grid (alphamap)

use crate::core::error::Error;
use crate::core::types::Result;

use super::weight_index;

/// Dense `width x height x layers` grid of material blend weights.
///
/// Invariant: for every cell the weights across layers sum to 1 within
/// [`WEIGHT_SUM_TOLERANCE`](super::WEIGHT_SUM_TOLERANCE). Callers of
/// [`set_weights`](WeightGrid::set_weights) pre-normalize; the grid only
/// checks the invariant in debug builds and fails with `InvariantViolation`
/// when it does not hold.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightGrid {
    width: usize,
    height: usize,
    layers: usize,
    data: Vec<f32>,
}

impl WeightGrid {
    /// Create a grid with the first layer fully weighted everywhere
    pub fn new(width: usize, height: usize, layers: usize) -> Self {
        let mut data = vec![0.0; width * height * layers];
        if layers > 0 {
            for cell in data.chunks_exact_mut(layers) {
                cell[0] = 1.0;
            }
        }
        Self {
            width,
            height,
            layers,
            data,
        }
    }

    /// Rebuild a grid from an already-flattened layer-interleaved buffer
    pub fn from_flat(width: usize, height: usize, layers: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != width * height * layers {
            return Err(Error::DimensionMismatch {
                expected: format!(
                    "{} values ({}x{}x{})",
                    width * height * layers,
                    width,
                    height,
                    layers
                ),
                found: format!("{} values", data.len()),
            });
        }
        Ok(Self {
            width,
            height,
            layers,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of material layers
    pub fn layers(&self) -> usize {
        self.layers
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

    /// All layer weights of the cell at `(x, z)`
    pub fn weights(&self, x: usize, z: usize) -> Result<&[f32]> {
        self.check_bounds(x, z)?;
        let start = weight_index(x, z, 0, self.width, self.layers);
        Ok(&self.data[start..start + self.layers])
    }

    /// Replace all layer weights of the cell at `(x, z)`.
    ///
    /// `values` must hold exactly one weight per layer and be pre-normalized;
    /// the sum invariant is only verified in debug builds.
    pub fn set_weights(&mut self, x: usize, z: usize, values: &[f32]) -> Result<()> {
        self.check_bounds(x, z)?;
        if values.len() != self.layers {
            return Err(Error::InvariantViolation(format!(
                "cell ({x}, {z}): {} weights supplied for {} layers",
                values.len(),
                self.layers
            )));
        }
        #[cfg(debug_assertions)]
        if self.layers > 0 {
            let sum: f32 = values.iter().sum();
            if (sum - 1.0).abs() > super::WEIGHT_SUM_TOLERANCE {
                return Err(Error::InvariantViolation(format!(
                    "cell ({x}, {z}): weight sum {sum} drifted beyond tolerance"
                )));
            }
        }
        let start = weight_index(x, z, 0, self.width, self.layers);
        self.data[start..start + self.layers].copy_from_slice(values);
        Ok(())
    }

    /// Layer-interleaved flat view of the grid, for the persistence codec
    pub fn as_flat(&self) -> &[f32] {
        &self.data
    }

    /// Replace all cells from a flat buffer of matching dimensions
    pub fn fill_from(&mut self, data: &[f32]) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Error::DimensionMismatch {
                expected: format!(
                    "{} values ({}x{}x{})",
                    self.data.len(),
                    self.width,
                    self.height,
                    self.layers
                ),
                found: format!("{} values", data.len()),
            });
        }
        self.data.copy_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_satisfies_sum_invariant() {
        let grid = WeightGrid::new(4, 3, 3);
        for z in 0..3 {
            for x in 0..4 {
                let w = grid.weights(x, z).unwrap();
                assert_eq!(w, &[1.0, 0.0, 0.0]);
            }
        }
    }

    #[test]
    fn test_set_and_get_weights() {
        let mut grid = WeightGrid::new(4, 4, 2);
        grid.set_weights(2, 1, &[0.3, 0.7]).unwrap();
        assert_eq!(grid.weights(2, 1).unwrap(), &[0.3, 0.7]);
        // Neighbours untouched
        assert_eq!(grid.weights(1, 1).unwrap(), &[1.0, 0.0]);
        assert_eq!(grid.weights(2, 2).unwrap(), &[1.0, 0.0]);
    }

    #[test]
    fn test_wrong_layer_count_rejected() {
        let mut grid = WeightGrid::new(2, 2, 3);
        let err = grid.set_weights(0, 0, &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_sum_invariant_checked_in_debug() {
        let mut grid = WeightGrid::new(2, 2, 2);
        let err = grid.set_weights(0, 0, &[0.9, 0.3]).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
        // Within tolerance passes
        grid.set_weights(0, 0, &[0.50003, 0.5]).unwrap();
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let grid = WeightGrid::new(4, 4, 2);
        assert!(matches!(grid.weights(4, 0), Err(Error::OutOfBounds { .. })));
        assert!(matches!(grid.weights(0, 7), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_from_flat_rejects_wrong_size() {
        let err = WeightGrid::from_flat(2, 2, 2, vec![0.0; 7]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }
}
