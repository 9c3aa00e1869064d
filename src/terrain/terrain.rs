//! The active terrain instance

use glam::Vec3;

use crate::grid::{HeightGrid, WeightGrid};

use super::transform::TerrainTransform;

/// A decorative object placed on the terrain.
///
/// `rotation_y` is in degrees. Visual representation is an external
/// collaborator's concern; the core only carries the record so it can be
/// persisted alongside the grids.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub prefab: String,
    pub position: Vec3,
    pub rotation_y: f32,
}

/// Opaque decorative sub-layer (grass patches, pebbles and the like).
///
/// Copied by value on clone, never algorithmically processed.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailLayer {
    pub prototype: String,
    pub density: Vec<i32>,
}

/// A complete editable terrain: elevation, material weights, world placement,
/// layer identity, decorative sub-layers and placed objects.
///
/// Exactly one terrain is active per editing session; creating or loading a
/// new one replaces the previous instance wholesale.
#[derive(Debug, Clone)]
pub struct Terrain {
    heights: HeightGrid,
    weights: WeightGrid,
    transform: TerrainTransform,
    layer_names: Vec<String>,
    detail_layers: Vec<DetailLayer>,
    objects: Vec<PlacedObject>,
}

impl Terrain {
    pub(crate) fn new(
        heights: HeightGrid,
        weights: WeightGrid,
        transform: TerrainTransform,
        layer_names: Vec<String>,
        detail_layers: Vec<DetailLayer>,
    ) -> Self {
        Self {
            heights,
            weights,
            transform,
            layer_names,
            detail_layers,
            objects: Vec::new(),
        }
    }

    pub fn heights(&self) -> &HeightGrid {
        &self.heights
    }

    pub fn heights_mut(&mut self) -> &mut HeightGrid {
        &mut self.heights
    }

    pub fn weights(&self) -> &WeightGrid {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut WeightGrid {
        &mut self.weights
    }

    pub fn transform(&self) -> TerrainTransform {
        self.transform
    }

    /// Names of the material layers, index-aligned with the weight grid
    pub fn layer_names(&self) -> &[String] {
        &self.layer_names
    }

    pub fn layer_count(&self) -> usize {
        self.weights.layers()
    }

    pub fn detail_layers(&self) -> &[DetailLayer] {
        &self.detail_layers
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn place_object(&mut self, object: PlacedObject) {
        self.objects.push(object);
    }

    /// Replace the whole object list (used when loading a save slot)
    pub fn set_objects(&mut self, objects: Vec<PlacedObject>) {
        self.objects = objects;
    }

    pub fn clear_objects(&mut self) {
        self.objects.clear();
    }

    /// Deep-copy this terrain into an independent instance.
    ///
    /// Grids, layer names and detail sub-layers are copied cell-for-cell;
    /// the object list starts empty unless `copy_objects` is set.
    pub fn duplicate(&self, copy_objects: bool) -> Terrain {
        let mut clone = Terrain::new(
            self.heights.clone(),
            self.weights.clone(),
            self.transform,
            self.layer_names.clone(),
            self.detail_layers.clone(),
        );
        if copy_objects {
            clone.objects = self.objects.clone();
        }
        clone
    }
}
