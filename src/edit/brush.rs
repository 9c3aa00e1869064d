//! Brush shapes and the per-cell contribution kernel

/// Footprint and falloff family of a brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushShape {
    /// Linear falloff, zero at the rim, full strength at the center
    #[default]
    Circle,
    /// Flat strength over the whole square footprint
    Square,
    /// Circle geometry with negated magnitude; lowers elevation only
    Eraser,
}

/// Per-stroke brush configuration. Transient tool state, never persisted
/// with the terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSpec {
    pub shape: BrushShape,
    /// Brush radius in grid cells, > 0
    pub radius: f32,
    pub strength: f32,
}

impl BrushSpec {
    pub fn new(shape: BrushShape, radius: f32, strength: f32) -> Self {
        Self {
            shape,
            radius,
            strength,
        }
    }
}

/// Contribution map of one stroke over the clipped bounding window.
///
/// `x_start`/`z_start` anchor the window in grid space; contributions are
/// stored window-local, row-major. Cells outside the brush shape hold zero.
#[derive(Debug, Clone)]
pub struct BrushWindow {
    pub x_start: usize,
    pub z_start: usize,
    pub width: usize,
    pub height: usize,
    contributions: Vec<f32>,
}

impl BrushWindow {
    /// Contribution at window-local `(wx, wz)`
    pub fn contribution(&self, wx: usize, wz: usize) -> f32 {
        self.contributions[wz * self.width + wx]
    }

    /// Iterate `(grid_x, grid_z, contribution)` over every window cell
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        (0..self.height).flat_map(move |wz| {
            (0..self.width).map(move |wx| {
                (
                    self.x_start + wx,
                    self.z_start + wz,
                    self.contribution(wx, wz),
                )
            })
        })
    }
}

/// Compute the contribution window for a brush centered on grid cell
/// `(cx, cz)`, clipped to a `grid_width x grid_height` grid.
///
/// Distances are measured from the truncated half-width of the clipped
/// window, not from `(cx, cz)`: at grid edges the window is asymmetric and
/// the effective center shifts inward with it.
pub fn compute_window(
    spec: &BrushSpec,
    cx: i64,
    cz: i64,
    grid_width: usize,
    grid_height: usize,
) -> BrushWindow {
    // A non-positive or NaN radius has no footprint; it must not invert the
    // window bounds below
    if !(spec.radius > 0.0) {
        return BrushWindow {
            x_start: 0,
            z_start: 0,
            width: 0,
            height: 0,
            contributions: Vec::new(),
        };
    }

    // Footprint half-extent in whole cells, via the rounded diameter
    let half = ((spec.radius * 2.0).round() as i64) / 2;

    let max_x = grid_width as i64 - 1;
    let max_z = grid_height as i64 - 1;
    let x_start = (cx - half).clamp(0, max_x);
    let x_end = (cx + half).clamp(0, max_x);
    let z_start = (cz - half).clamp(0, max_z);
    let z_end = (cz + half).clamp(0, max_z);

    let width = (x_end - x_start + 1) as usize;
    let height = (z_end - z_start + 1) as usize;
    let center_x = (width / 2) as i64;
    let center_z = (height / 2) as i64;

    let mut contributions = vec![0.0; width * height];
    for wz in 0..height {
        for wx in 0..width {
            let dx = (wx as i64 - center_x) as f32;
            let dz = (wz as i64 - center_z) as f32;
            let distance = (dx * dx + dz * dz).sqrt();

            let value = match spec.shape {
                BrushShape::Circle if distance <= spec.radius => {
                    spec.strength * (1.0 - distance / spec.radius)
                }
                BrushShape::Square if dx.abs() <= spec.radius && dz.abs() <= spec.radius => {
                    spec.strength
                }
                BrushShape::Eraser if distance <= spec.radius => {
                    -spec.strength * (1.0 - distance / spec.radius)
                }
                _ => 0.0,
            };
            contributions[wz * width + wx] = value;
        }
    }

    BrushWindow {
        x_start: x_start as usize,
        z_start: z_start as usize,
        width,
        height,
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_full_strength_at_center() {
        let spec = BrushSpec::new(BrushShape::Circle, 2.0, 0.5);
        let win = compute_window(&spec, 5, 5, 10, 10);
        assert_eq!(win.x_start, 3);
        assert_eq!(win.z_start, 3);
        assert_eq!(win.width, 5);
        assert_eq!(win.height, 5);
        // Center of the 5x5 window is the stroke center
        assert_eq!(win.contribution(2, 2), 0.5);
    }

    #[test]
    fn test_circle_zero_at_rim() {
        let spec = BrushSpec::new(BrushShape::Circle, 2.0, 0.5);
        let win = compute_window(&spec, 5, 5, 10, 10);
        // Distance exactly equal to the radius: rim, zero falloff
        assert_eq!(win.contribution(4, 2), 0.0);
        assert_eq!(win.contribution(2, 0), 0.0);
        // Corners lie outside the circle entirely
        assert_eq!(win.contribution(0, 0), 0.0);
        assert_eq!(win.contribution(4, 4), 0.0);
    }

    #[test]
    fn test_circle_linear_falloff() {
        let spec = BrushSpec::new(BrushShape::Circle, 2.0, 1.0);
        let win = compute_window(&spec, 5, 5, 10, 10);
        // One cell from the center: 1 - 1/2
        assert!((win.contribution(3, 2) - 0.5).abs() < 1e-6);
        assert!((win.contribution(2, 1) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_square_is_flat() {
        let spec = BrushSpec::new(BrushShape::Square, 2.0, 0.3);
        let win = compute_window(&spec, 5, 5, 10, 10);
        for wz in 0..win.height {
            for wx in 0..win.width {
                assert_eq!(win.contribution(wx, wz), 0.3);
            }
        }
    }

    #[test]
    fn test_eraser_negates_circle() {
        let circle = BrushSpec::new(BrushShape::Circle, 2.0, 0.5);
        let eraser = BrushSpec::new(BrushShape::Eraser, 2.0, 0.5);
        let cw = compute_window(&circle, 5, 5, 10, 10);
        let ew = compute_window(&eraser, 5, 5, 10, 10);
        for wz in 0..cw.height {
            for wx in 0..cw.width {
                assert_eq!(ew.contribution(wx, wz), -cw.contribution(wx, wz));
            }
        }
    }

    #[test]
    fn test_window_clips_at_grid_edge() {
        let spec = BrushSpec::new(BrushShape::Circle, 2.0, 0.5);
        let win = compute_window(&spec, 0, 0, 10, 10);
        // Only the in-grid quadrant remains
        assert_eq!(win.x_start, 0);
        assert_eq!(win.z_start, 0);
        assert_eq!(win.width, 3);
        assert_eq!(win.height, 3);
        // Center shifts to the truncated half-width of the clipped window
        assert_eq!(win.contribution(1, 1), 0.5);
    }

    #[test]
    fn test_fractional_radius_footprint() {
        // Radius 2.4 rounds to the same 5-cell footprint as radius 2
        let spec = BrushSpec::new(BrushShape::Circle, 2.4, 0.5);
        let win = compute_window(&spec, 5, 5, 10, 10);
        assert_eq!(win.width, 5);
        // But the falloff uses the exact radius
        assert!(win.contribution(4, 2) > 0.0);
    }

    #[test]
    fn test_degenerate_radius_has_empty_footprint() {
        for radius in [0.0, -5.0, f32::NAN] {
            let spec = BrushSpec::new(BrushShape::Circle, radius, 0.5);
            let win = compute_window(&spec, 5, 5, 10, 10);
            assert_eq!(win.width, 0);
            assert_eq!(win.height, 0);
            assert_eq!(win.cells().count(), 0);
        }
    }

    #[test]
    fn test_cells_iterator_covers_window() {
        let spec = BrushSpec::new(BrushShape::Square, 1.0, 1.0);
        let win = compute_window(&spec, 5, 5, 10, 10);
        let cells: Vec<_> = win.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (4, 4, 1.0));
        assert_eq!(cells[8], (6, 6, 1.0));
    }
}
