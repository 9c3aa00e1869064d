//! Terrain templates - the clone source for fresh and loaded terrains

use glam::Vec3;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::grid::{HeightGrid, WeightGrid, cell_index};

use super::terrain::{DetailLayer, Terrain};
use super::transform::TerrainTransform;

/// Parameters for the noise-generated default heightfield
#[derive(Clone, Debug)]
pub struct ReliefParams {
    pub seed: u32,
    /// Horizontal noise scale in cells (larger = smoother)
    pub scale: f32,
    pub octaves: u32,
    pub persistence: f32,
    pub lacunarity: f32,
    /// Peak normalized elevation of the generated relief
    pub amplitude: f32,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            scale: 64.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            amplitude: 0.25,
        }
    }
}

/// Immutable description of a terrain from which editable instances are
/// stamped out.
///
/// Creating a fresh terrain and loading a save slot both start here: load is
/// "instantiate the template, then overwrite the grids from persisted data".
#[derive(Debug, Clone)]
pub struct TerrainTemplate {
    width: usize,
    height: usize,
    transform: TerrainTransform,
    layer_names: Vec<String>,
    heights: Vec<f32>,
    weights: Vec<f32>,
    detail_layers: Vec<DetailLayer>,
}

impl TerrainTemplate {
    /// A flat zero-elevation template with the first layer fully weighted
    pub fn flat(
        width: usize,
        height: usize,
        transform: TerrainTransform,
        layer_names: Vec<String>,
    ) -> Self {
        let layers = layer_names.len();
        Self {
            width,
            height,
            transform,
            layer_names,
            heights: HeightGrid::new(width, height).as_flat().to_vec(),
            weights: WeightGrid::new(width, height, layers).as_flat().to_vec(),
            detail_layers: Vec::new(),
        }
    }

    /// A template whose heightfield is seeded from fractal Brownian motion,
    /// normalized into `[0, amplitude]`
    pub fn rolling(
        width: usize,
        height: usize,
        transform: TerrainTransform,
        layer_names: Vec<String>,
        params: ReliefParams,
    ) -> Self {
        let noise = Fbm::<Perlin>::new(params.seed)
            .set_octaves(params.octaves as usize)
            .set_persistence(params.persistence as f64)
            .set_lacunarity(params.lacunarity as f64);

        let mut template = Self::flat(width, height, transform, layer_names);
        for z in 0..height {
            for x in 0..width {
                let nx = (x as f32 / params.scale) as f64;
                let nz = (z as f32 / params.scale) as f64;
                // Noise is in [-1, 1]; remap to [0, amplitude]
                let normalized = (noise.get([nx, nz]) as f32 + 1.0) / 2.0;
                template.heights[cell_index(x, z, width)] =
                    (normalized * params.amplitude).clamp(0.0, 1.0);
            }
        }
        template
    }

    /// Attach decorative sub-layers to be copied into every instance
    pub fn with_detail_layers(mut self, detail_layers: Vec<DetailLayer>) -> Self {
        self.detail_layers = detail_layers;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layer_count(&self) -> usize {
        self.layer_names.len()
    }

    /// Stamp out an independent editable terrain.
    ///
    /// Fails with `SourceUnavailable` when the template is degenerate (zero
    /// resolution or no material layers).
    pub fn instantiate(&self) -> Result<Terrain> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::SourceUnavailable(format!(
                "template resolution is {}x{}",
                self.width, self.height
            )));
        }
        if self.layer_names.is_empty() {
            return Err(Error::SourceUnavailable(
                "template has no material layers".into(),
            ));
        }
        let heights = HeightGrid::from_flat(self.width, self.height, self.heights.clone())?;
        let weights = WeightGrid::from_flat(
            self.width,
            self.height,
            self.layer_names.len(),
            self.weights.clone(),
        )?;
        Ok(Terrain::new(
            heights,
            weights,
            self.transform,
            self.layer_names.clone(),
            self.detail_layers.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_transform() -> TerrainTransform {
        TerrainTransform::new(Vec3::ZERO, Vec3::new(100.0, 30.0, 100.0))
    }

    #[test]
    fn test_flat_template_instantiates() {
        let template =
            TerrainTemplate::flat(16, 16, unit_transform(), vec!["grass".into(), "sand".into()]);
        let terrain = template.instantiate().unwrap();
        assert_eq!(terrain.heights().width(), 16);
        assert_eq!(terrain.layer_count(), 2);
        assert_eq!(terrain.heights().get(7, 7).unwrap(), 0.0);
        assert_eq!(terrain.weights().weights(7, 7).unwrap(), &[1.0, 0.0]);
        assert!(terrain.objects().is_empty());
    }

    #[test]
    fn test_zero_resolution_is_unavailable() {
        let template = TerrainTemplate::flat(0, 16, unit_transform(), vec!["grass".into()]);
        assert!(matches!(
            template.instantiate(),
            Err(Error::SourceUnavailable(_))
        ));
    }

    #[test]
    fn test_no_layers_is_unavailable() {
        let template = TerrainTemplate::flat(16, 16, unit_transform(), Vec::new());
        assert!(matches!(
            template.instantiate(),
            Err(Error::SourceUnavailable(_))
        ));
    }

    #[test]
    fn test_instances_are_independent() {
        let template = TerrainTemplate::flat(8, 8, unit_transform(), vec!["grass".into()]);
        let mut first = template.instantiate().unwrap();
        first.heights_mut().set(2, 2, 1.0).unwrap();

        let second = template.instantiate().unwrap();
        assert_eq!(second.heights().get(2, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_rolling_template_stays_in_range() {
        let template = TerrainTemplate::rolling(
            32,
            32,
            unit_transform(),
            vec!["grass".into()],
            ReliefParams::default(),
        );
        let terrain = template.instantiate().unwrap();
        let mut saw_relief = false;
        for z in 0..32 {
            for x in 0..32 {
                let h = terrain.heights().get(x, z).unwrap();
                assert!((0.0..=1.0).contains(&h));
                if h > 0.0 {
                    saw_relief = true;
                }
            }
        }
        assert!(saw_relief, "noise template produced a flat grid");
    }

    #[test]
    fn test_rolling_is_deterministic_per_seed() {
        let params = ReliefParams {
            seed: 77,
            ..Default::default()
        };
        let a = TerrainTemplate::rolling(16, 16, unit_transform(), vec!["g".into()], params.clone());
        let b = TerrainTemplate::rolling(16, 16, unit_transform(), vec!["g".into()], params);
        assert_eq!(
            a.instantiate().unwrap().heights().as_flat(),
            b.instantiate().unwrap().heights().as_flat()
        );
    }
}
