//! World-space to grid-space mapping

use glam::Vec3;

/// Placement of a terrain in world space.
///
/// `origin` is the world position of cell (0, 0); `size` spans the full
/// horizontal extent on x/z (y is the vertical scale of a 1.0 elevation).
/// The mapping deliberately lives in one place: the brush applicator and the
/// codec both derive grid coordinates through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainTransform {
    pub origin: Vec3,
    pub size: Vec3,
}

impl TerrainTransform {
    pub fn new(origin: Vec3, size: Vec3) -> Self {
        Self { origin, size }
    }

    /// Fractional grid coordinates of a world point for a grid of the given
    /// resolution. The point is assumed to lie within the horizontal extent;
    /// hit-testing is the caller's concern.
    pub fn world_to_grid(&self, point: Vec3, width: usize, height: usize) -> (f32, f32) {
        let relative_x = (point.x - self.origin.x) / self.size.x;
        let relative_z = (point.z - self.origin.z) / self.size.z;
        (relative_x * width as f32, relative_z * height as f32)
    }

    /// World position of a grid cell at the given elevation (inverse of
    /// [`world_to_grid`](TerrainTransform::world_to_grid))
    pub fn grid_to_world(&self, x: f32, z: f32, elevation: f32, width: usize, height: usize) -> Vec3 {
        Vec3::new(
            self.origin.x + x / width as f32 * self.size.x,
            self.origin.y + elevation * self.size.y,
            self.origin.z + z / height as f32 * self.size.z,
        )
    }
}
