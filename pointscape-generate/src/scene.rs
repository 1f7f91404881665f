//! Scene recipes
//!
//! The per-scene assembly the demo apps use: which generators run, with
//! which parameters, and how the interactive markers are seeded.

use crate::markers::pick_markers;
use crate::pathways::{generate_pathways, PathwayParams};
use crate::rng_for;
use crate::surface::{generate_surface, HueBand, SurfaceParams};
use crate::terrain::{generate_terrain, TerrainParams};
use pointscape_core::{MarkerIndex, PointCategory, PointSet, Result, ScenePoint};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The available scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    Brain,
    Heart,
    Mountain,
}

/// A generated scene: the full point set (markers included) and the indices
/// of its interactive markers.
#[derive(Debug, Clone)]
pub struct SceneBuild {
    pub points: PointSet,
    pub markers: MarkerIndex,
}

/// Number of picked markers for the organ scenes
const PICKED_MARKERS: usize = 3;

impl SceneKind {
    /// Build the scene's point set.
    ///
    /// `total_points` steers the dominant population (surface scatter or
    /// terrain scatter); rejection filtering and fixed sub-populations mean
    /// the result is not exactly `total_points` long.
    pub fn build(&self, total_points: usize, seed: Option<u64>) -> Result<SceneBuild> {
        match self {
            SceneKind::Brain => build_brain(total_points, seed),
            SceneKind::Heart => build_heart(total_points, seed),
            SceneKind::Mountain => build_mountain(total_points, seed),
        }
    }
}

fn subseed(seed: Option<u64>, salt: u64) -> Option<u64> {
    seed.map(|s| s.wrapping_add(salt))
}

/// Brain: 30% cutaway cortex shell, pathway networks grown from roots
/// (one root per ~3300 requested points), 10% highlight clones, 3 picked
/// markers.
fn build_brain(total_points: usize, seed: Option<u64>) -> Result<SceneBuild> {
    let mut surface_params = SurfaceParams::brain();
    surface_params.seed = subseed(seed, 1);
    let mut points = generate_surface((total_points as f64 * 0.3) as usize, &surface_params)?;

    let mut pathway_params = PathwayParams::brain();
    pathway_params.roots = ((total_points as f64 * 0.0003) as usize).max(1);
    pathway_params.seed = subseed(seed, 2);
    points.extend(generate_pathways(&pathway_params)?);

    add_highlights(
        &mut points,
        (total_points as f64 * 0.1) as usize,
        subseed(seed, 3),
    );

    let markers = pick_markers(&mut points, PICKED_MARKERS, subseed(seed, 4));
    Ok(SceneBuild { points, markers })
}

/// Heart: a full surface shell, 3 picked markers.
fn build_heart(total_points: usize, seed: Option<u64>) -> Result<SceneBuild> {
    let mut surface_params = SurfaceParams::heart();
    surface_params.seed = subseed(seed, 1);
    let mut points = generate_surface(total_points, &surface_params)?;

    let markers = pick_markers(&mut points, PICKED_MARKERS, subseed(seed, 2));
    Ok(SceneBuild { points, markers })
}

/// Mountain: terrain with inline points of interest; markers are scanned,
/// not picked.
fn build_mountain(total_points: usize, seed: Option<u64>) -> Result<SceneBuild> {
    let mut terrain_params = TerrainParams::mountain();
    terrain_params.seed = subseed(seed, 1);
    let points = generate_terrain(total_points, &terrain_params)?;

    let markers = MarkerIndex::scan(&points);
    Ok(SceneBuild { points, markers })
}

/// Clone `count` random existing points with a small offset and a yellow
/// highlight color. No-op on an empty set.
fn add_highlights(points: &mut PointSet, count: usize, seed: Option<u64>) {
    if points.is_empty() {
        return;
    }

    let band = HueBand {
        hue: (0.15, 0.05),
        saturation: (0.6, 0.2),
        lightness: (0.6, 0.2),
    };

    let mut rng = rng_for(seed);
    for _ in 0..count {
        let source = points[rng.gen_range(0..points.len())];
        let mut position = source.position;
        position.x += (rng.gen::<f64>() - 0.5) * 0.05;
        position.y += (rng.gen::<f64>() - 0.5) * 0.05;
        position.z += (rng.gen::<f64>() - 0.5) * 0.05;

        let color = band.sample(&mut rng);
        points.push(ScenePoint::new(
            position,
            color,
            0.05,
            PointCategory::Structure,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brain_scene_mixes_categories() {
        let build = SceneKind::Brain.build(3000, Some(21)).unwrap();
        let has = |c: PointCategory| build.points.iter().any(|p| p.category == c);
        assert!(has(PointCategory::Structure));
        assert!(has(PointCategory::Pathway));
        assert!(has(PointCategory::Marker));
        assert_eq!(build.markers.len(), PICKED_MARKERS);
        // Picked markers sit at the end of the set
        let last = build.points.len() - 1;
        assert!(build.markers.contains(last));
    }

    #[test]
    fn test_heart_scene_exact_surface_count() {
        let build = SceneKind::Heart.build(1500, Some(21)).unwrap();
        // No cutaway: surface scatter plus the picked markers
        assert_eq!(build.points.len(), 1500 + PICKED_MARKERS);
        assert_eq!(build.markers.len(), PICKED_MARKERS);
    }

    #[test]
    fn test_mountain_scene_scans_inline_markers() {
        let build = SceneKind::Mountain.build(4000, Some(21)).unwrap();
        let inline = build
            .points
            .iter()
            .filter(|p| p.category == PointCategory::Marker)
            .count();
        assert_eq!(build.markers.len(), inline);
    }

    #[test]
    fn test_every_point_valid() {
        for kind in [SceneKind::Brain, SceneKind::Heart, SceneKind::Mountain] {
            let build = kind.build(1000, Some(33)).unwrap();
            for point in &build.points {
                assert!(point.is_valid());
            }
        }
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let a = SceneKind::Heart.build(800, Some(5)).unwrap();
        let b = SceneKind::Heart.build(800, Some(5)).unwrap();
        assert_eq!(a.points.len(), b.points.len());
        assert_eq!(a.markers.as_slice(), b.markers.as_slice());
    }
}
