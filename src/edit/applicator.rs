//! Stroke application onto the active terrain

use glam::Vec3;

use crate::core::error::Error;
use crate::core::types::Result;
use crate::terrain::Terrain;

use super::brush::{BrushShape, BrushSpec, compute_window};

/// Apply a sculpting stroke at a world point.
///
/// The point is mapped through the terrain transform and *rounded* to the
/// nearest cell. Weight painting floors instead; the asymmetry is
/// deliberate and changes which ring of cells a stroke touches at sub-cell
/// positions. Each kernel contribution is added to the existing elevation,
/// then clamped to `[0, 1]`.
pub fn apply_elevation(terrain: &mut Terrain, point: Vec3, spec: &BrushSpec) -> Result<()> {
    let width = terrain.heights().width();
    let height = terrain.heights().height();
    let (gx, gz) = terrain.transform().world_to_grid(point, width, height);
    let cx = gx.round() as i64;
    let cz = gz.round() as i64;

    let window = compute_window(spec, cx, cz, width, height);
    for (x, z, contribution) in window.cells() {
        if contribution == 0.0 {
            continue;
        }
        let current = terrain.heights().get(x, z)?;
        terrain.heights_mut().set(x, z, current + contribution)?;
    }
    Ok(())
}

/// Apply a material-painting stroke at a world point.
///
/// The target layer gains each kernel contribution; every other layer loses
/// an equal share of it. All layers are clamped to `[0, 1]` and the cell is
/// renormalized so the weights sum to exactly 1. Single-layer terrains skip
/// redistribution and stay fully painted. Eraser brushes touch nothing in
/// paint mode.
pub fn apply_weights(
    terrain: &mut Terrain,
    point: Vec3,
    spec: &BrushSpec,
    target_layer: usize,
) -> Result<()> {
    let layers = terrain.layer_count();
    if target_layer >= layers {
        return Err(Error::InvalidLayer {
            layer: target_layer,
            layer_count: layers,
        });
    }
    if spec.shape == BrushShape::Eraser {
        log::debug!("eraser brush ignored in paint mode");
        return Ok(());
    }

    let width = terrain.weights().width();
    let height = terrain.weights().height();
    let (gx, gz) = terrain.transform().world_to_grid(point, width, height);
    let cx = gx.floor() as i64;
    let cz = gz.floor() as i64;

    let window = compute_window(spec, cx, cz, width, height);
    let mut cell = vec![0.0f32; layers];
    for (x, z, contribution) in window.cells() {
        if contribution == 0.0 {
            continue;
        }
        cell.copy_from_slice(terrain.weights().weights(x, z)?);

        if layers == 1 {
            // No other layer to redistribute into; the cell stays fully painted
            cell[0] = 1.0;
        } else {
            let mut total = 0.0;
            for (k, weight) in cell.iter_mut().enumerate() {
                if k == target_layer {
                    *weight += contribution;
                } else {
                    *weight -= contribution / (layers - 1) as f32;
                }
                *weight = weight.clamp(0.0, 1.0);
                total += *weight;
            }
            if total > f32::EPSILON {
                for weight in cell.iter_mut() {
                    *weight /= total;
                }
            } else {
                // Everything clamped away; repaint the cell with the target
                cell.fill(0.0);
                cell[target_layer] = 1.0;
            }
        }
        terrain.weights_mut().set_weights(x, z, &cell)?;
    }
    Ok(())
}
