//! Editor settings and startup configuration persistence

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::core::types::Result;

use super::registry::DEFAULT_SLOT;
use super::store::SlotStore;

/// Store entry holding the editor tool settings
pub const EDITOR_SETTINGS_FILE: &str = "TerrainEditorSettings.json";

/// Store entry holding the startup terrain selection
pub const STARTUP_CONFIG_FILE: &str = "GameSettings.json";

/// User-tool configuration: brush tuning and the selected material layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub brush_strength: f32,
    pub brush_radius: f32,
    /// Seconds between stroke applications while a gesture is held
    pub step_of_draw: f32,
    pub selected_layer: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            brush_strength: 0.1,
            brush_radius: 2.5,
            step_of_draw: 0.1,
            selected_layer: 0,
        }
    }
}

impl EditorSettings {
    /// Whether every field is usable by the brush pipeline. Persisted entries
    /// are hand-editable; a radius of zero or below would give the brush an
    /// inverted footprint.
    fn is_valid(&self) -> bool {
        self.brush_strength.is_finite()
            && self.brush_radius.is_finite()
            && self.brush_radius > 0.0
            && self.step_of_draw.is_finite()
            && self.step_of_draw >= 0.0
    }

    /// Load settings, creating the entry with defaults when it is missing,
    /// unreadable or out of range (the session keeps editing either way)
    pub fn load(store: &mut dyn SlotStore) -> Self {
        let settings: Self = load_or_default(store, EDITOR_SETTINGS_FILE);
        if settings.is_valid() {
            settings
        } else {
            log::warn!(
                "out-of-range values in {EDITOR_SETTINGS_FILE}; falling back to defaults"
            );
            let value = Self::default();
            if let Err(e) = value.save(store) {
                log::warn!("failed to write defaults to {EDITOR_SETTINGS_FILE}: {e}");
            }
            value
        }
    }

    pub fn save(&self, store: &mut dyn SlotStore) -> Result<()> {
        store.write_all(EDITOR_SETTINGS_FILE, &serde_json::to_vec_pretty(self)?)
    }
}

/// Which slot to load when the editor starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupConfig {
    pub selected_slot: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            selected_slot: DEFAULT_SLOT.to_string(),
        }
    }
}

impl StartupConfig {
    pub fn load(store: &mut dyn SlotStore) -> Self {
        load_or_default(store, STARTUP_CONFIG_FILE)
    }

    pub fn save(&self, store: &mut dyn SlotStore) -> Result<()> {
        store.write_all(STARTUP_CONFIG_FILE, &serde_json::to_vec_pretty(self)?)
    }
}

/// Read and parse `name`, falling back to defaults and re-writing the entry
/// on any failure
fn load_or_default<T>(store: &mut dyn SlotStore, name: &str) -> T
where
    T: Default + Serialize + DeserializeOwned,
{
    if store.exists(name) {
        match store
            .read_all(name)
            .and_then(|bytes| Ok(serde_json::from_slice(&bytes)?))
        {
            Ok(value) => return value,
            Err(e) => log::warn!("failed to read {name}: {e}; falling back to defaults"),
        }
    }
    let value = T::default();
    if let Err(e) = store.write_all(name, &serde_json::to_vec_pretty(&value).unwrap_or_default()) {
        log::warn!("failed to write defaults to {name}: {e}");
    }
    value
}
