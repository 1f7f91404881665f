//! Parametric organ-surface generator
//!
//! Maps a 2D parameter domain `(u, v)` through an ellipsoid-plus-folding
//! surface function to synthesize organ-like point shells (brain cortex,
//! heart muscle). The shape function itself is pure; randomness enters only
//! through parameter sampling and the jitter layer.

use crate::color::hsl_to_rgb;
use crate::rng_for;
use nalgebra::Vector3;
use pointscape_core::{Error, Point3d, PointCategory, PointSet, Result, ScenePoint};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI};

/// A hue band with jittered saturation and lightness.
///
/// Each field is a `(base, spread)` pair; a sampled component is
/// `base + rand() * spread`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HueBand {
    pub hue: (f32, f32),
    pub saturation: (f32, f32),
    pub lightness: (f32, f32),
}

impl HueBand {
    /// Sample an RGB color from the band
    pub fn sample<R: Rng>(&self, rng: &mut R) -> [f32; 3] {
        hsl_to_rgb(
            self.hue.0 + rng.gen::<f32>() * self.hue.1,
            self.saturation.0 + rng.gen::<f32>() * self.saturation.1,
            self.lightness.0 + rng.gen::<f32>() * self.lightness.1,
        )
    }
}

/// Parameters for an organ surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceParams {
    /// Ellipsoid semi-axes (width, height, depth)
    pub radii: Vector3<f64>,
    /// Amplitude of the high-frequency folding perturbation
    pub folding_amplitude: f64,
    /// Frequency of the folding perturbation
    pub folding_frequency: f64,
    /// Full width of the per-axis position jitter applied to each sample
    pub jitter: f64,
    /// Cutaway filter: keep only points with `x > threshold`
    pub cutaway_threshold: Option<f64>,
    /// Color band for generated points
    pub hue_band: HueBand,
    /// Render size of generated points
    pub point_size: f32,
    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl SurfaceParams {
    /// Brain cortex: wide ellipsoid, strong folding, blue band, cutaway
    /// showing the right hemisphere.
    pub fn brain() -> Self {
        Self {
            radii: Vector3::new(3.0, 3.5, 2.5),
            folding_amplitude: 0.35,
            folding_frequency: 8.0,
            jitter: 0.1,
            cutaway_threshold: Some(-0.5),
            hue_band: HueBand {
                hue: (0.6, 0.1),
                saturation: (0.5, 0.2),
                lightness: (0.4, 0.2),
            },
            point_size: 0.05,
            seed: None,
        }
    }

    /// Heart muscle: rounder ellipsoid, gentle folding, red band, no cutaway.
    pub fn heart() -> Self {
        Self {
            radii: Vector3::new(2.2, 2.6, 2.0),
            folding_amplitude: 0.15,
            folding_frequency: 4.0,
            jitter: 0.1,
            cutaway_threshold: None,
            hue_band: HueBand {
                hue: (0.95, 0.05),
                saturation: (0.6, 0.2),
                lightness: (0.4, 0.2),
            },
            point_size: 0.05,
            seed: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.radii.iter().any(|r| *r <= 0.0) {
            return Err(Error::Generation(
                "surface radii must be positive".to_string(),
            ));
        }
        if self.folding_amplitude < 0.0 || self.jitter < 0.0 {
            return Err(Error::Generation(
                "folding amplitude and jitter must be non-negative".to_string(),
            ));
        }
        if self.point_size <= 0.0 {
            return Err(Error::Generation(
                "point size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Evaluate the parametric surface at `(u, v)`.
///
/// `u ∈ [0, π]`, `v ∈ [0, 2π]`. Ellipsoid base plus folding terms; the
/// y-term is phase-shifted by π/4 so the folds do not align across axes.
/// Pure: the same `(u, v)` always yields the same position.
pub fn organ_surface(u: f64, v: f64, params: &SurfaceParams) -> Point3d {
    let (a, b, c) = (params.radii.x, params.radii.y, params.radii.z);
    let amp = params.folding_amplitude;
    let k = params.folding_frequency;

    let x = a * u.sin() * v.cos() + amp * (k * u).sin() * (k * v).cos();
    let y = b * u.sin() * v.sin() + amp * (k * u + FRAC_PI_4).sin() * (k * v).sin();
    let z = c * u.cos() + amp * (k * u).cos() * (k * v).sin();

    Point3d::new(x, y, z)
}

struct SurfaceSample {
    u: f64,
    v: f64,
    jitter: Vector3<f64>,
    color: [f32; 3],
}

/// Generate up to `count` points on an organ surface.
///
/// Samples `(u, v)` uniformly, jitters positions, and applies the cutaway
/// hemisphere filter when configured. Rejection may under-produce: the
/// returned set has at most `count` points and callers must not assume an
/// exact total.
pub fn generate_surface(count: usize, params: &SurfaceParams) -> Result<PointSet> {
    params.validate()?;

    let mut rng = rng_for(params.seed);
    let samples: Vec<SurfaceSample> = (0..count)
        .map(|_| SurfaceSample {
            u: rng.gen::<f64>() * PI,
            v: rng.gen::<f64>() * 2.0 * PI,
            jitter: Vector3::new(
                (rng.gen::<f64>() - 0.5) * params.jitter,
                (rng.gen::<f64>() - 0.5) * params.jitter,
                (rng.gen::<f64>() - 0.5) * params.jitter,
            ),
            color: params.hue_band.sample(&mut rng),
        })
        .collect();

    // Shape evaluation is pure, so it parallelizes over the sampled params.
    let points: Vec<ScenePoint> = samples
        .par_iter()
        .filter_map(|s| {
            let position = organ_surface(s.u, s.v, params) + s.jitter;
            if let Some(threshold) = params.cutaway_threshold {
                if position.x <= threshold {
                    return None;
                }
            }
            Some(ScenePoint::new(
                position,
                s.color,
                params.point_size,
                PointCategory::Structure,
            ))
        })
        .collect();

    Ok(PointSet::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_surface_function_is_deterministic() {
        let params = SurfaceParams::brain();
        let a = organ_surface(0.7, 2.1, &params);
        let b = organ_surface(0.7, 2.1, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_surface_reduces_to_ellipsoid_without_folding() {
        let mut params = SurfaceParams::brain();
        params.folding_amplitude = 0.0;
        let p = organ_surface(PI / 2.0, 0.0, &params);
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_generate_respects_cutaway() {
        let mut params = SurfaceParams::brain();
        params.seed = Some(7);
        let set = generate_surface(5000, &params).unwrap();
        assert!(set.len() <= 5000);
        assert!(!set.is_empty());
        for point in &set {
            assert!(point.position.x > -0.5);
            assert_eq!(point.category, PointCategory::Structure);
            assert!(point.is_valid());
        }
    }

    #[test]
    fn test_generate_without_cutaway_produces_exact_count() {
        let mut params = SurfaceParams::heart();
        params.seed = Some(7);
        let set = generate_surface(2000, &params).unwrap();
        assert_eq!(set.len(), 2000);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut params = SurfaceParams::brain();
        params.seed = Some(42);
        let a = generate_surface(500, &params).unwrap();
        let b = generate_surface(500, &params).unwrap();
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.color, pb.color);
        }
    }

    #[test]
    fn test_invalid_radii_rejected() {
        let mut params = SurfaceParams::brain();
        params.radii.y = 0.0;
        assert!(matches!(
            generate_surface(10, &params),
            Err(Error::Generation(_))
        ));
    }

    #[test]
    fn test_zero_count() {
        let params = SurfaceParams::heart();
        let set = generate_surface(0, &params).unwrap();
        assert!(set.is_empty());
    }
}
