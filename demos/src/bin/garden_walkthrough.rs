// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough: plant thoughts, persist them, reload, and drive the camera.
//!
//! Run with `RUST_LOG=debug cargo run -p grove_demos --bin garden_walkthrough`
//! to see growth and camera events.

use grove_camera::{CameraConfig, CameraController, CameraMode, PointerTarget};
use grove_garden::{CoordinateMapper, Placement, SlotAllocator, ThoughtRecord, derive_island_count};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mapper = CoordinateMapper::default();
    let alloc = SlotAllocator::new(&mapper);
    let mut camera = CameraController::new(CameraConfig::default(), Size::new(1280.0, 720.0));

    let mut thoughts: Vec<ThoughtRecord> = Vec::new();
    camera.fit(mapper.grid().world_rect(derive_island_count(&thoughts)));

    let mut now = 0.0;
    for i in 0..14 {
        let planting = alloc.plant(&thoughts);
        thoughts.push(ThoughtRecord::new(format!("thought-{i}"), planting.stored));
        if planting.grew {
            camera.animate_fit(mapper.grid().world_rect(planting.island_count), now);
        }
        while camera.mode() == CameraMode::Animating {
            now += 1_000.0 / 60.0;
            camera.tick(now);
        }
    }

    // Free a slot and replant: the gap is filled before anything new opens.
    thoughts.retain(|t| t.id != "thought-5");
    let planting = alloc.plant(&thoughts);
    println!(
        "replanted into island {} slot {} (global {})",
        planting.slot.island, planting.slot.local, planting.slot.global
    );
    thoughts.push(ThoughtRecord::new("thought-14", planting.stored));

    // Persist and reload; only the stored position travels.
    let json = serde_json::to_string_pretty(&thoughts)?;
    let reloaded: Vec<ThoughtRecord> = serde_json::from_str(&json)?;
    println!("{} records, {} bytes of JSON", reloaded.len(), json.len());

    for t in &reloaded {
        let world = mapper.world_position_of(t.position);
        let screen = camera.state().world_to_screen(world);
        let kind = match mapper.classify(t.position) {
            Placement::SlotAligned(slot) => format!("slot {}", slot.global),
            Placement::FreeForm => "free-form".to_owned(),
        };
        println!(
            "{:>12}  {kind:<9}  world ({:7.1}, {:7.1})  screen ({:6.1}, {:6.1})",
            t.id, world.x, world.y, screen.x, screen.y
        );
    }

    // A little user interaction.
    camera.on_wheel(Point::new(640.0, 360.0), -120.0);
    camera.on_pointer_down(Point::new(640.0, 360.0), PointerTarget::Background);
    camera.on_pointer_move(Point::new(540.0, 380.0));
    camera.on_pointer_up();
    let state = camera.state();
    println!(
        "camera: scale {:.3}, offset ({:.1}, {:.1}), revision {}",
        state.scale,
        state.x,
        state.y,
        camera.revision()
    );
    Ok(())
}
