//! Build each scene and report what the generators produced.

use anyhow::Result;
use pointscape_core::{Bounded, PointCategory, PointSet};
use pointscape_generate::SceneKind;
use pointscape_view::{CameraConfig, SceneSession};

fn main() -> Result<()> {
    println!("pointscape scene statistics\n");

    for (kind, config, total) in [
        (SceneKind::Brain, CameraConfig::brain(), 200_000),
        (SceneKind::Heart, CameraConfig::heart(), 200_000),
        (SceneKind::Mountain, CameraConfig::mountain(), 600_000),
    ] {
        let build = kind.build(total, Some(1))?;
        report(kind, &build.points);

        // Markers are already inline in the built set
        let session = SceneSession::new(&build.points, &PointSet::new(), config)?;
        println!(
            "  buffer: {} points, {} markers, position bytes: {}",
            session.buffer().len(),
            session.markers().len(),
            session.buffer().position_bytes().len()
        );
        println!();
    }

    Ok(())
}

fn report(kind: SceneKind, points: &PointSet) {
    let count = |category: PointCategory| {
        points
            .iter()
            .filter(|p| p.category == category)
            .count()
    };

    println!("{:?}: {} points", kind, points.len());
    println!(
        "  structure: {}, pathway: {}, terrain: {}, marker: {}",
        count(PointCategory::Structure),
        count(PointCategory::Pathway),
        count(PointCategory::Terrain),
        count(PointCategory::Marker),
    );

    let (min, max) = points.bounding_box();
    println!(
        "  bounds: ({:.2}, {:.2}, {:.2}) .. ({:.2}, {:.2}, {:.2}), center ({:.2}, {:.2}, {:.2})",
        min.x,
        min.y,
        min.z,
        max.x,
        max.y,
        max.z,
        points.center().x,
        points.center().y,
        points.center().z,
    );
}
