//! Branching pathway generator
//!
//! Grows tree-like fractal paths (neural pathways) inside a host organ
//! surface. Growth is a recursive process: walk jittered samples along a
//! branch, keep only samples that pass the inside-shape predicate, then
//! spawn shrunken child branches with perturbed directions.

use crate::color::hsl_to_rgb;
use crate::rng_for;
use crate::surface::{organ_surface, SurfaceParams};
use nalgebra::Vector3;
use pointscape_core::{Error, Point3d, PointCategory, PointSet, Result, ScenePoint};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for pathway growth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayParams {
    /// Number of seed origins placed on the host surface
    pub roots: usize,
    /// Inclusive range of initial branches per root
    pub branches_per_root: (u32, u32),
    /// Inclusive range of recursion depth per root
    pub depth: (u32, u32),
    /// Length of a first-generation branch
    pub initial_length: f64,
    /// Jitter width of a first-generation branch
    pub initial_width: f64,
    /// Length/width shrink factor per generation
    pub shrink: f64,
    /// Samples emitted per unit of branch length
    pub samples_per_unit: f64,
    /// Host surface bounding the growth
    pub host: SurfaceParams,
    /// Safety margin applied to the host radius in the inside test
    pub margin: f64,
    /// Render size of pathway points
    pub point_size: f32,
    /// RNG seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl PathwayParams {
    /// The brain scene's pathway layout: 60 roots, 3-5 branches, depth 3-4.
    pub fn brain() -> Self {
        Self {
            roots: 60,
            branches_per_root: (3, 5),
            depth: (3, 4),
            initial_length: 1.0,
            initial_width: 0.1,
            shrink: 0.7,
            samples_per_unit: 20.0,
            host: SurfaceParams::brain(),
            margin: 0.9,
            point_size: 0.05,
            seed: None,
        }
    }

    fn validate(&self) -> Result<()> {
        self.host.validate()?;
        if !(0.0..1.0).contains(&self.shrink) {
            return Err(Error::Generation(
                "shrink factor must be in (0, 1)".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.margin) || self.margin == 0.0 {
            return Err(Error::Generation(
                "margin must be in (0, 1]".to_string(),
            ));
        }
        if self.initial_length <= 0.0 || self.initial_width < 0.0 {
            return Err(Error::Generation(
                "branch length must be positive and width non-negative".to_string(),
            ));
        }
        if self.branches_per_root.0 > self.branches_per_root.1 || self.depth.0 > self.depth.1 {
            return Err(Error::Generation(
                "range bounds must be ordered".to_string(),
            ));
        }
        Ok(())
    }
}

/// Inside-shape predicate: is `p` within the host surface?
///
/// Recovers the angular position `(u, v)` of `p` from its axis-normalized
/// direction and compares the point's radial distance against the host
/// surface radius there, scaled by the safety margin.
pub fn inside_surface(p: &Point3d, host: &SurfaceParams, margin: f64) -> bool {
    let r = p.coords.norm();
    if r == 0.0 {
        return true;
    }

    // Normalize by the semi-axes so the angles match the parametrization.
    let q = Vector3::new(
        p.x / host.radii.x,
        p.y / host.radii.y,
        p.z / host.radii.z,
    );
    let qn = q.norm();
    if qn == 0.0 {
        return true;
    }

    let u = (q.z / qn).clamp(-1.0, 1.0).acos();
    let v = q.y.atan2(q.x).rem_euclid(2.0 * PI);

    let surface_radius = organ_surface(u, v, host).coords.norm();
    r < surface_radius * margin
}

/// Generate a pathway network inside the host surface.
///
/// The emitted point count depends on branch geometry, not on a caller
/// count: every sample that falls outside the host is rejected, so dense
/// hosts keep more of the walk. Recursion is bounded by the sampled depth;
/// a zero depth yields an empty set.
pub fn generate_pathways(params: &PathwayParams) -> Result<PointSet> {
    params.validate()?;

    let mut rng = rng_for(params.seed);
    let mut set = PointSet::new();

    for _ in 0..params.roots {
        let u = rng.gen::<f64>() * PI;
        let v = rng.gen::<f64>() * 2.0 * PI;
        let start = organ_surface(u, v, &params.host);

        let branches = rng.gen_range(params.branches_per_root.0..=params.branches_per_root.1);
        let depth = rng.gen_range(params.depth.0..=params.depth.1);

        for _ in 0..branches {
            let direction = random_direction(&mut rng);
            grow(
                &mut set,
                &mut rng,
                params,
                start,
                direction,
                params.initial_length,
                params.initial_width,
                depth,
                depth,
            );
        }
    }

    Ok(set)
}

#[allow(clippy::too_many_arguments)]
fn grow(
    set: &mut PointSet,
    rng: &mut StdRng,
    params: &PathwayParams,
    start: Point3d,
    direction: Vector3<f64>,
    length: f64,
    width: f64,
    depth_remaining: u32,
    total_depth: u32,
) {
    if depth_remaining == 0 {
        return;
    }

    let end = start + direction * length;
    let sample_count = (length * params.samples_per_unit).floor() as usize;

    for i in 0..sample_count {
        let t = i as f64 / sample_count as f64;
        let mut position = start + (end - start) * t;
        position.x += (rng.gen::<f64>() - 0.5) * width;
        position.y += (rng.gen::<f64>() - 0.5) * width;
        position.z += (rng.gen::<f64>() - 0.5) * width;

        if !inside_surface(&position, &params.host, params.margin) {
            continue;
        }

        let hue = 0.3 + rng.gen::<f32>() * 0.1;
        let saturation = 0.5 + rng.gen::<f32>() * 0.2;
        let lightness = 0.5 + (depth_remaining as f32 / total_depth as f32) * 0.3;
        set.push(ScenePoint::new(
            position,
            hsl_to_rgb(hue, saturation, lightness),
            params.point_size,
            PointCategory::Pathway,
        ));
    }

    let children = rng.gen_range(2..=3);
    for _ in 0..children {
        let perturbed = Vector3::new(
            direction.x + rng.gen::<f64>() - 0.5,
            direction.y + rng.gen::<f64>() - 0.5,
            direction.z + rng.gen::<f64>() - 0.5,
        );
        let child_direction = normalize_or(perturbed, direction);
        grow(
            set,
            rng,
            params,
            end,
            child_direction,
            length * params.shrink,
            width * params.shrink,
            depth_remaining - 1,
            total_depth,
        );
    }
}

fn random_direction(rng: &mut StdRng) -> Vector3<f64> {
    let candidate = Vector3::new(
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
    );
    normalize_or(candidate, Vector3::z())
}

fn normalize_or(v: Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm > 1e-12 {
        v / norm
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params(seed: u64) -> PathwayParams {
        let mut params = PathwayParams::brain();
        params.roots = 4;
        params.branches_per_root = (2, 2);
        params.depth = (2, 2);
        params.seed = Some(seed);
        params
    }

    #[test]
    fn test_zero_depth_emits_nothing() {
        let mut params = small_params(1);
        params.depth = (0, 0);
        let set = generate_pathways(&params).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_every_point_inside_host() {
        let params = small_params(11);
        let set = generate_pathways(&params).unwrap();
        assert!(!set.is_empty());
        for point in &set {
            assert!(inside_surface(&point.position, &params.host, params.margin));
            assert_eq!(point.category, PointCategory::Pathway);
            assert!(point.is_valid());
        }
    }

    #[test]
    fn test_seeded_growth_is_reproducible() {
        let params = small_params(23);
        let a = generate_pathways(&params).unwrap();
        let b = generate_pathways(&params).unwrap();
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.position, pb.position);
        }
    }

    #[test]
    fn test_inside_predicate_center_and_far() {
        let host = SurfaceParams::brain();
        assert!(inside_surface(&Point3d::origin(), &host, 0.9));
        assert!(!inside_surface(&Point3d::new(50.0, 0.0, 0.0), &host, 0.9));
    }

    #[test]
    fn test_invalid_shrink_rejected() {
        let mut params = small_params(1);
        params.shrink = 1.0;
        assert!(generate_pathways(&params).is_err());
    }

    #[test]
    fn test_unordered_depth_range_rejected() {
        let mut params = small_params(1);
        params.depth = (4, 3);
        assert!(generate_pathways(&params).is_err());
    }
}
