//! Variant 1: one white ring of 10,000 sprites, no pointer interaction.
//!
//! Space stops and restarts the animation. Left-drag orbits, scroll zooms.
//!
//! Run with: `cargo run --example single_ring`

use dustring::prelude::*;

fn main() {
    env_logger::init();

    let scene = Scene::single_ring();
    let sprite = SpriteConfig::load_or_fallback("assets/particle.png");

    if let Err(e) = run(scene, sprite) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
