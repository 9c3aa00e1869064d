//! Terrain aggregate, world transform and templates

pub mod template;
pub mod terrain;
pub mod transform;

pub use template::{ReliefParams, TerrainTemplate};
pub use terrain::{DetailLayer, PlacedObject, Terrain};
pub use transform::TerrainTransform;
