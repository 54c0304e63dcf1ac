//! Walks through the editor flow without a renderer attached: add a box
//! group and a pyramid group, select a primitive, print both outbound views,
//! trigger a capacity failure, and clear the scene.
//!
//! Run with `RUST_LOG=debug` to see the scene's log output.

use anyhow::Result;
use cairn::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = cairn::default();

    let box_ids = scene.add_group(&GroupParams::new(
        PrimitiveKind::Box,
        Dimensions::default(),
        3,
    ))?;
    scene.add_group(&GroupParams::new(
        PrimitiveKind::Pyramid,
        Dimensions::new(2.0, 2.0, 3.0),
        2,
    ))?;
    scene.select(box_ids[0])?;

    println!("--- list view ---");
    for entry in scene.list_entries() {
        println!(
            "{:10} {} at ({}, {}, {}){}",
            entry.label,
            rgb_to_hex(entry.swatch),
            entry.position.x,
            entry.position.y,
            entry.position.z,
            if entry.selected { "  [selected]" } else { "" }
        );
    }

    println!("--- draw list ---");
    for instance in scene.draw_list() {
        println!(
            "mesh with {} vertices / {} triangles at y = {}{}",
            instance.geometry.vertex_count(),
            instance.geometry.triangle_count(),
            instance.position.y,
            if instance.outlined { "  (outlined)" } else { "" }
        );
    }

    // The ring scan covers 361 cells, so this request cannot fit and the
    // scene stays exactly as it was.
    match scene.add_group(&GroupParams::new(
        PrimitiveKind::Box,
        Dimensions::default(),
        1000,
    )) {
        Err(err) => println!("expected failure: {err}"),
        Ok(_) => unreachable!("a 1000-primitive group cannot fit on the grid"),
    }
    println!("scene still holds {} primitives", scene.len());

    scene.clear();
    println!("cleared, {} primitives remain", scene.len());

    Ok(())
}
