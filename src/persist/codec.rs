//! JSON artifact codec: flattens grids to a linear persisted form and back

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::grid::{HeightGrid, WeightGrid};
use crate::terrain::PlacedObject;

/// Persisted elevation artifact: row-major flatten tagged with dimensions
#[derive(Serialize, Deserialize)]
struct HeightArtifact {
    heights: Vec<f32>,
    width: usize,
    height: usize,
}

/// Persisted weight artifact: row-major-then-layer flatten
#[derive(Serialize, Deserialize)]
struct WeightArtifact {
    weights: Vec<f32>,
    width: usize,
    height: usize,
    layers: usize,
}

#[derive(Serialize, Deserialize)]
struct ObjectPosition {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Serialize, Deserialize)]
struct ObjectRecord {
    prefab: String,
    position: ObjectPosition,
    rotation_y: f32,
}

#[derive(Serialize, Deserialize)]
struct ObjectArtifact {
    objects: Vec<ObjectRecord>,
}

/// Encode an elevation grid to its persisted form
pub fn encode_heights(grid: &HeightGrid) -> Result<Vec<u8>> {
    let artifact = HeightArtifact {
        heights: grid.as_flat().to_vec(),
        width: grid.width(),
        height: grid.height(),
    };
    Ok(serde_json::to_vec(&artifact)?)
}

/// Decode an elevation grid, validating the declared dimensions against the
/// flattened payload
pub fn decode_heights(bytes: &[u8]) -> Result<HeightGrid> {
    let artifact: HeightArtifact = serde_json::from_slice(bytes)?;
    HeightGrid::from_flat(artifact.width, artifact.height, artifact.heights)
}

/// Encode a weight grid to its persisted form
pub fn encode_weights(grid: &WeightGrid) -> Result<Vec<u8>> {
    let artifact = WeightArtifact {
        weights: grid.as_flat().to_vec(),
        width: grid.width(),
        height: grid.height(),
        layers: grid.layers(),
    };
    Ok(serde_json::to_vec(&artifact)?)
}

/// Decode a weight grid, validating the declared dimensions against the
/// flattened payload
pub fn decode_weights(bytes: &[u8]) -> Result<WeightGrid> {
    let artifact: WeightArtifact = serde_json::from_slice(bytes)?;
    WeightGrid::from_flat(
        artifact.width,
        artifact.height,
        artifact.layers,
        artifact.weights,
    )
}

/// Encode a placed-object list. An empty list encodes to a valid artifact,
/// distinct from the artifact being absent.
pub fn encode_objects(objects: &[PlacedObject]) -> Result<Vec<u8>> {
    let artifact = ObjectArtifact {
        objects: objects
            .iter()
            .map(|o| ObjectRecord {
                prefab: o.prefab.clone(),
                position: ObjectPosition {
                    x: o.position.x,
                    y: o.position.y,
                    z: o.position.z,
                },
                rotation_y: o.rotation_y,
            })
            .collect(),
    };
    Ok(serde_json::to_vec(&artifact)?)
}

/// Decode a placed-object list
pub fn decode_objects(bytes: &[u8]) -> Result<Vec<PlacedObject>> {
    let artifact: ObjectArtifact = serde_json::from_slice(bytes)?;
    Ok(artifact
        .objects
        .into_iter()
        .map(|r| PlacedObject {
            prefab: r.prefab,
            position: Vec3::new(r.position.x, r.position.y, r.position.z),
            rotation_y: r.rotation_y,
        })
        .collect())
}
