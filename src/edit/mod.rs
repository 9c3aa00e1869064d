//! Brush kernel and stroke application

pub mod applicator;
pub mod brush;

pub use applicator::{apply_elevation, apply_weights};
pub use brush::{BrushShape, BrushSpec, BrushWindow};
