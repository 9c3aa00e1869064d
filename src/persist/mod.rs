//! Save-slot persistence: backing store, artifact codec and registry

pub mod codec;
pub mod registry;
pub mod settings;
pub mod store;

pub use codec::{decode_heights, decode_objects, decode_weights, encode_heights, encode_objects, encode_weights};
pub use registry::{DEFAULT_SLOT, list_slots, list_slots_with_default};
pub use settings::{EDITOR_SETTINGS_FILE, STARTUP_CONFIG_FILE, EditorSettings, StartupConfig};
pub use store::{FileStore, MemStore, SlotStore};

/// Artifact name suffixes of one save slot
pub const HEIGHTS_SUFFIX: &str = "_heights.json";
pub const WEIGHTS_SUFFIX: &str = "_textures.json";
pub const OBJECTS_SUFFIX: &str = "_objects.json";

/// Artifact name for a slot's elevation grid
pub fn heights_artifact(slot: &str) -> String {
    format!("{slot}{HEIGHTS_SUFFIX}")
}

/// Artifact name for a slot's weight grid
pub fn weights_artifact(slot: &str) -> String {
    format!("{slot}{WEIGHTS_SUFFIX}")
}

/// Artifact name for a slot's placed-object list
pub fn objects_artifact(slot: &str) -> String {
    format!("{slot}{OBJECTS_SUFFIX}")
}
