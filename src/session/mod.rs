//! Editing session: the single active terrain and its orchestration

use glam::Vec3;

use crate::core::time::StrokeTimer;
use crate::core::types::Result;
use crate::core::Error;
use crate::edit::{BrushShape, BrushSpec, apply_elevation, apply_weights};
use crate::persist::{
    self, EditorSettings, StartupConfig, DEFAULT_SLOT, SlotStore, codec,
};
use crate::terrain::{Terrain, TerrainTemplate};

/// What a stroke does to the terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Raise or lower elevation
    Sculpt,
    /// Repaint material weights toward the selected layer
    Paint,
}

/// Owns the active terrain and drives editing against it.
///
/// Exactly one terrain is active; creating or loading a new one replaces the
/// previous instance, so collaborators hold the session rather than the
/// terrain itself. The gesture layer calls [`begin_stroke`](EditSession::begin_stroke),
/// [`on_stroke_tick`](EditSession::on_stroke_tick) and
/// [`end_stroke`](EditSession::end_stroke); everything else is explicit.
pub struct EditSession {
    template: TerrainTemplate,
    terrain: Terrain,
    settings: EditorSettings,
    brush: BrushShape,
    timer: StrokeTimer,
}

impl EditSession {
    /// Start a session on a fresh instance of the template
    pub fn new(template: TerrainTemplate) -> Result<Self> {
        let terrain = template.instantiate()?;
        let settings = EditorSettings::default();
        let timer = StrokeTimer::new(settings.step_of_draw);
        Ok(Self {
            template,
            terrain,
            settings,
            brush: BrushShape::default(),
            timer,
        })
    }

    /// Start a session with settings restored from the store
    pub fn with_stored_settings(
        template: TerrainTemplate,
        store: &mut dyn SlotStore,
    ) -> Result<Self> {
        let mut session = Self::new(template)?;
        session.settings = EditorSettings::load(store);
        session.timer.set_step(session.settings.step_of_draw);
        Ok(session)
    }

    /// Start a session honoring the persisted startup configuration: load
    /// the selected slot, or fall back to the default template when the slot
    /// is reserved, missing or unloadable.
    pub fn startup(template: TerrainTemplate, store: &mut dyn SlotStore) -> Result<Self> {
        let mut session = Self::with_stored_settings(template, store)?;
        let config = StartupConfig::load(store);
        if config.selected_slot != DEFAULT_SLOT {
            if let Err(e) = session.load(store, &config.selected_slot) {
                log::warn!(
                    "startup slot '{}' failed to load ({e}); using default terrain",
                    config.selected_slot
                );
            }
        }
        Ok(session)
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn terrain_mut(&mut self) -> &mut Terrain {
        &mut self.terrain
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Replace the tool settings and persist them
    pub fn update_settings(
        &mut self,
        settings: EditorSettings,
        store: &mut dyn SlotStore,
    ) -> Result<()> {
        self.timer.set_step(settings.step_of_draw);
        self.settings = settings;
        self.settings.save(store)
    }

    pub fn brush(&self) -> BrushShape {
        self.brush
    }

    pub fn select_brush(&mut self, brush: BrushShape) {
        self.brush = brush;
    }

    /// Select the material layer painted by subsequent strokes
    pub fn select_layer(&mut self, layer: usize, store: &mut dyn SlotStore) -> Result<()> {
        let layer_count = self.terrain.layer_count();
        if layer >= layer_count {
            return Err(Error::InvalidLayer { layer, layer_count });
        }
        self.settings.selected_layer = layer;
        self.settings.save(store)
    }

    /// Notify the session that a stroke gesture started
    pub fn begin_stroke(&mut self) {
        self.timer.begin_stroke();
    }

    /// Notify the session that the stroke gesture ended
    pub fn end_stroke(&mut self) {
        self.timer.end_stroke();
    }

    /// Whether the throttle would let a stroke tick paint right now
    pub fn ready_to_paint(&self) -> bool {
        self.timer.ready()
    }

    /// One tick of a held stroke: accumulate `elapsed` seconds and, when the
    /// throttle allows, apply one brush application at `point`.
    ///
    /// Returns whether the terrain was touched.
    pub fn on_stroke_tick(&mut self, point: Vec3, elapsed: f32, mode: EditMode) -> Result<bool> {
        self.timer.tick(elapsed);
        if !self.timer.try_consume() {
            return Ok(false);
        }
        let spec = BrushSpec::new(
            self.brush,
            self.settings.brush_radius,
            self.settings.brush_strength,
        );
        match mode {
            EditMode::Sculpt => apply_elevation(&mut self.terrain, point, &spec)?,
            EditMode::Paint => {
                apply_weights(&mut self.terrain, point, &spec, self.settings.selected_layer)?
            }
        }
        Ok(true)
    }

    /// Persist the active terrain under `slot`: elevation, weights and the
    /// placed-object list, each as a whole-entry replacement.
    pub fn save(&self, store: &mut dyn SlotStore, slot: &str) -> Result<()> {
        store.write_all(
            &persist::heights_artifact(slot),
            &codec::encode_heights(self.terrain.heights())?,
        )?;
        store.write_all(
            &persist::weights_artifact(slot),
            &codec::encode_weights(self.terrain.weights())?,
        )?;
        store.write_all(
            &persist::objects_artifact(slot),
            &codec::encode_objects(self.terrain.objects())?,
        )?;
        log::info!("saved terrain to slot '{slot}'");
        Ok(())
    }

    /// Load `slot` into a fresh template instance and make it the active
    /// terrain.
    ///
    /// Load is clone-then-overwrite: absent artifacts leave the template
    /// data in place (an absent object artifact means an empty list). Any
    /// failure, including `DimensionMismatch` against the template
    /// resolution, leaves the currently active terrain untouched.
    pub fn load(&mut self, store: &mut dyn SlotStore, slot: &str) -> Result<()> {
        let mut fresh = self.template.instantiate()?;

        let heights_name = persist::heights_artifact(slot);
        if store.exists(&heights_name) {
            let decoded = codec::decode_heights(&store.read_all(&heights_name)?)?;
            if decoded.width() != fresh.heights().width()
                || decoded.height() != fresh.heights().height()
            {
                return Err(Error::DimensionMismatch {
                    expected: format!(
                        "{}x{}",
                        fresh.heights().width(),
                        fresh.heights().height()
                    ),
                    found: format!("{}x{}", decoded.width(), decoded.height()),
                });
            }
            fresh.heights_mut().fill_from(decoded.as_flat())?;
        }

        let weights_name = persist::weights_artifact(slot);
        if store.exists(&weights_name) {
            let decoded = codec::decode_weights(&store.read_all(&weights_name)?)?;
            if decoded.width() != fresh.weights().width()
                || decoded.height() != fresh.weights().height()
                || decoded.layers() != fresh.weights().layers()
            {
                return Err(Error::DimensionMismatch {
                    expected: format!(
                        "{}x{}x{}",
                        fresh.weights().width(),
                        fresh.weights().height(),
                        fresh.weights().layers()
                    ),
                    found: format!(
                        "{}x{}x{}",
                        decoded.width(),
                        decoded.height(),
                        decoded.layers()
                    ),
                });
            }
            fresh.weights_mut().fill_from(decoded.as_flat())?;
        }

        let objects_name = persist::objects_artifact(slot);
        if store.exists(&objects_name) {
            fresh.set_objects(codec::decode_objects(&store.read_all(&objects_name)?)?);
        }

        // Only now replace the active terrain; the old instance drops here
        self.terrain = fresh;
        log::info!("loaded terrain from slot '{slot}'");
        Ok(())
    }
}
