//! Drive a scene session with scripted input: look around, zoom, walk,
//! pick a marker, reset.

use anyhow::Result;
use pointscape_core::PointSet;
use pointscape_generate::SceneKind;
use pointscape_view::{CameraConfig, KeyState, MoveKey, PointerButton, SceneSession};
use std::time::Instant;

const TICK: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let build = SceneKind::Mountain.build(50_000, Some(7))?;
    let mut session = SceneSession::new(&build.points, &PointSet::new(), CameraConfig::mountain())?;
    println!(
        "mountain scene: {} points, {} markers",
        session.buffer().len(),
        session.markers().len()
    );
    print_pose("start", &session);

    // Drag the view to the left
    let camera = session.camera_mut();
    camera.on_pointer_down(PointerButton::Left, 400.0, 300.0);
    for i in 1..=30 {
        camera.on_pointer_move(400.0 - i as f32 * 4.0, 300.0);
    }
    camera.on_pointer_up(PointerButton::Left);
    print_pose("after drag", &session);

    // Zoom toward the terrain
    for _ in 0..10 {
        session.camera_mut().on_scroll(-120.0);
    }
    print_pose("after zoom", &session);

    // Walk forward for two seconds, climbing
    let mut keys = KeyState::default();
    keys.set(MoveKey::Forward, true);
    keys.set(MoveKey::Up, true);
    for _ in 0..120 {
        session.camera_mut().tick(&keys, TICK);
    }
    keys.clear();
    print_pose("after walk", &session);

    // Simulate a click whose nearest intersections include a marker
    if let Some(&marker) = session.markers().iter().next() {
        let candidates = vec![marker.saturating_sub(1), marker];
        if let Some(selected) = session.click(&candidates) {
            println!("selected marker {}", selected.index);
        }
        let _ = session.hover(&candidates, Instant::now());
    }

    session.camera_mut().reset();
    print_pose("after reset", &session);

    session.teardown();
    println!("session torn down");
    Ok(())
}

fn print_pose(label: &str, session: &SceneSession) {
    let camera = session.camera();
    let p = camera.position();
    let t = camera.target();
    println!(
        "{:12} eye ({:7.2}, {:7.2}, {:7.2})  target ({:7.2}, {:7.2}, {:7.2})  yaw {:.3} pitch {:.3}",
        label, p.x, p.y, p.z, t.x, t.y, t.z,
        camera.yaw(),
        camera.pitch()
    );
}
