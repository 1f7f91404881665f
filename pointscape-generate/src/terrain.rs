//! Terrain height-field generator
//!
//! Height over a 2D extent is the max influence of a small set of fixed
//! peaks plus roughness noise, clamped to the peak ceiling. Three point
//! populations: a flat base plane, scattered samples, and explicit ridge
//! lines that trace interpolated paths across the field.

use crate::rng_for;
use nalgebra::Vector2;
use pointscape_core::{Error, Point3d, PointCategory, PointSet, Result, ScenePoint};
use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A terrain peak: location on the ground plane and its summit height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Peak {
    pub x: f64,
    pub z: f64,
    pub height: f64,
}

/// Parameters for terrain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Extent along x
    pub width: f64,
    /// Extent along z
    pub depth: f64,
    /// Reference height; peaks scale up to `2 * max_height`
    pub max_height: f64,
    /// Noise amplitude as a fraction of `max_height`
    pub roughness: f64,
    /// Peak layout; [`TerrainParams::new`] fills in the default three peaks
    pub peaks: Vec<Peak>,
    /// Number of ridge lines
    pub ridge_lines: usize,
    /// Samples per ridge line
    pub ridge_steps: usize,
    /// Base-plane samples as a fraction of the scatter count
    pub base_fraction: f64,
    /// Probability that an elevated sample becomes a point of interest
    pub poi_probability: f64,
    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl TerrainParams {
    /// Terrain with the default peak layout: three peaks at
    /// `2.0 / 1.6 / 1.8 × max_height`, spread over the extent.
    pub fn new(width: f64, depth: f64, max_height: f64, roughness: f64) -> Self {
        Self {
            width,
            depth,
            max_height,
            roughness,
            peaks: default_peaks(width, depth, max_height),
            ridge_lines: 50,
            ridge_steps: 100,
            base_fraction: 0.1,
            poi_probability: 0.005,
            seed: None,
        }
    }

    /// The mountain scene's layout: 200x200 extent, max height 50.
    pub fn mountain() -> Self {
        Self::new(200.0, 200.0, 50.0, 0.3)
    }

    fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.depth <= 0.0 {
            return Err(Error::Generation(
                "terrain extent must be positive".to_string(),
            ));
        }
        if self.max_height <= 0.0 {
            return Err(Error::Generation(
                "max_height must be positive".to_string(),
            ));
        }
        if self.roughness < 0.0 {
            return Err(Error::Generation(
                "roughness must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.poi_probability) {
            return Err(Error::Generation(
                "poi_probability must be in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }

    /// The hard upper bound on emitted heights: the tallest peak, or
    /// `2 * max_height` for the default layout.
    pub fn height_ceiling(&self) -> f64 {
        self.peaks
            .iter()
            .map(|p| p.height)
            .fold(2.0 * self.max_height, f64::max)
    }
}

/// Default peak layout, spread over the extent
pub fn default_peaks(width: f64, depth: f64, max_height: f64) -> Vec<Peak> {
    vec![
        Peak {
            x: -width / 4.0,
            z: 0.0,
            height: max_height * 2.0,
        },
        Peak {
            x: 0.0,
            z: depth / 4.0,
            height: max_height * 1.6,
        },
        Peak {
            x: width / 4.0,
            z: -depth / 4.0,
            height: max_height * 1.8,
        },
    ]
}

/// Height contributed by the peaks at ground position `(x, z)`.
///
/// Each peak contributes `height * max(0, 1 - distance / falloff)` where the
/// falloff radius is half the extent width; the field takes the max.
pub fn peak_height(x: f64, z: f64, peaks: &[Peak], falloff_radius: f64) -> f64 {
    let mut y = 0.0_f64;
    for peak in peaks {
        let distance = ((x - peak.x).powi(2) + (z - peak.z).powi(2)).sqrt();
        let influence = (1.0 - distance / falloff_radius).max(0.0);
        y = y.max(peak.height * influence);
    }
    y
}

/// Grayscale band for a given height: brightness steps up with elevation,
/// white in the snow band above `1.6 * max_height`. `snow_roll` staggers the
/// snow between pure white and light gray.
pub fn height_band_color(y: f64, max_height: f64, snow_roll: f64) -> [f32; 3] {
    let level = if y > 1.6 * max_height {
        if snow_roll < 0.7 {
            1.0
        } else {
            0.9
        }
    } else if y > 1.2 * max_height {
        0.8
    } else if y > 0.8 * max_height {
        0.6
    } else if y > 0.4 * max_height {
        0.4
    } else {
        0.2
    };
    [level, level, level]
}

struct GroundSample {
    x: f64,
    z: f64,
    noise_roll: f64,
    snow_roll: f64,
    poi_roll: f64,
    size: f32,
}

/// Generate a terrain point set: base plane, `count` scattered samples, and
/// ridge lines. Heights are clamped to `[0, height_ceiling]`; points of
/// interest get `Marker` category and the highlight color.
pub fn generate_terrain(count: usize, params: &TerrainParams) -> Result<PointSet> {
    params.validate()?;

    let mut rng = rng_for(params.seed);
    let base_count = (count as f64 * params.base_fraction) as usize;
    let mut set = PointSet::with_capacity(
        base_count + count + params.ridge_lines * params.ridge_steps,
    );

    // Base plane at y = 0
    for _ in 0..base_count {
        let sample = sample_ground(&mut rng, params);
        set.push(make_point(sample.x, 0.0, sample.z, &sample, params));
    }

    // Scattered mountain structure: sample with the RNG, evaluate the pure
    // height field in parallel.
    let samples: Vec<GroundSample> = (0..count).map(|_| sample_ground(&mut rng, params)).collect();
    let scatter: Vec<ScenePoint> = samples
        .par_iter()
        .map(|s| {
            let y = elevation(s.x, s.z, s.noise_roll, 1.0, params);
            make_point(s.x, y, s.z, s, params)
        })
        .collect();
    set.extend(scatter);

    // Ridge lines: interpolated ground paths, elevated by the same height
    // field with half-amplitude noise.
    for _ in 0..params.ridge_lines {
        let start = Vector2::new(
            rng.gen::<f64>() * params.width - params.width / 2.0,
            rng.gen::<f64>() * params.depth - params.depth / 2.0,
        );
        let end = Vector2::new(
            start.x + (rng.gen::<f64>() - 0.5) * params.width * 0.5,
            start.y + (rng.gen::<f64>() - 0.5) * params.depth * 0.5,
        );

        for j in 0..params.ridge_steps {
            let t = if params.ridge_steps > 1 {
                j as f64 / (params.ridge_steps - 1) as f64
            } else {
                0.0
            };
            let ground = start + (end - start) * t;
            let sample = GroundSample {
                x: ground.x,
                z: ground.y,
                noise_roll: rng.gen::<f64>(),
                snow_roll: rng.gen::<f64>(),
                poi_roll: rng.gen::<f64>(),
                size: 0.1 + rng.gen::<f32>() * 0.2,
            };
            let y = elevation(sample.x, sample.z, sample.noise_roll, 0.5, params);
            set.push(make_point(sample.x, y, sample.z, &sample, params));
        }
    }

    Ok(set)
}

fn sample_ground(rng: &mut StdRng, params: &TerrainParams) -> GroundSample {
    GroundSample {
        x: rng.gen::<f64>() * params.width - params.width / 2.0,
        z: rng.gen::<f64>() * params.depth - params.depth / 2.0,
        noise_roll: rng.gen::<f64>(),
        snow_roll: rng.gen::<f64>(),
        poi_roll: rng.gen::<f64>(),
        size: 0.1 + rng.gen::<f32>() * 0.2,
    }
}

fn elevation(x: f64, z: f64, noise_roll: f64, noise_scale: f64, params: &TerrainParams) -> f64 {
    let base = peak_height(x, z, &params.peaks, params.width / 2.0);
    let noise = (noise_roll - 0.5) * params.roughness * params.max_height * noise_scale;
    (base + noise).clamp(0.0, params.height_ceiling())
}

fn make_point(x: f64, y: f64, z: f64, sample: &GroundSample, params: &TerrainParams) -> ScenePoint {
    let is_poi = sample.poi_roll < params.poi_probability && y > 0.4 * params.max_height;
    let (color, category) = if is_poi {
        ([1.0, 0.0, 0.0], PointCategory::Marker)
    } else {
        (
            height_band_color(y, params.max_height, sample.snow_roll),
            PointCategory::Terrain,
        )
    };
    ScenePoint::new(Point3d::new(x, y, z), color, sample.size, category)
}
