//! Example: Drive a scene headlessly, the way the playground window does.
//!
//! Edits the scene's parameters through its configuration panel, then renders
//! a few frames and reports how much of each frame is lit.
//!
//! Run with:
//!     RUST_LOG=info cargo run --example render_scene -- repeating-circles

use anyhow::Context;
use shader_playground::scenes::keys;
use shader_playground::{ControlValue, Playground, RenderConfig};

fn lit_fraction(pixels: &[u8]) -> f32 {
    let lit = pixels
        .chunks(4)
        .filter(|p| p[0] > 16 || p[1] > 16 || p[2] > 16)
        .count();
    lit as f32 / (pixels.len() / 4) as f32
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scene_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "repeating-circles".to_string());
    let mut playground = Playground::from_name(&scene_name)?;

    println!("Shader Playground - Headless Scene");
    println!("==================================\n");
    println!("{}\n", playground.info().to_json()?);

    playground.edit(|panel| -> anyhow::Result<()> {
        panel.toggle(keys::ROTATING)?;
        panel.set(keys::NUM_ROWS, ControlValue::Number(3.0))?;
        panel.set(keys::NUM_POLYGONS, ControlValue::Number(6.0))?;
        panel.set(keys::SCALE, ControlValue::Number(1.5))?;

        println!("{}", panel.panel().title);
        for row in panel.rows() {
            println!("  {:<10} {}", row.label, row.value_text.unwrap_or_default());
        }
        println!();
        Ok(())
    })?;

    let config = RenderConfig {
        width: 640,
        height: 360,
        ..Default::default()
    };
    let renderer = pollster::block_on(playground.renderer(config))
        .context("failed to create scene renderer")?;
    println!("GPU: {}\n", renderer.adapter_info().name);

    let fps = 30.0;
    for frame in 0..5 {
        let time = frame as f32 / fps;
        let pixels = playground.render_frame(&renderer, time)?;
        println!(
            "  frame {} (t={:.3}s): {:.1}% lit",
            frame,
            time,
            lit_fraction(&pixels) * 100.0
        );
    }

    Ok(())
}
