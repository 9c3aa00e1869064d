//! Terrasculpt - heightfield terrain sculpting, painting and persistence
//!
//! The core of a terrain editor: brush strokes that raise/lower a normalized
//! elevation grid or repaint per-cell material weights, deep-cloneable
//! terrain instances, and lossless JSON persistence of complete terrain
//! state under named save slots. Input gestures, cameras and UI live
//! outside this crate; they only decide when and where the core is invoked.

pub mod core;
pub mod edit;
pub mod grid;
pub mod persist;
pub mod session;
pub mod terrain;

pub use crate::core::{Error, Result};
pub use crate::session::{EditMode, EditSession};
