//! Variant 2: three nested tinted rings repelled by the mouse point.
//!
//! Moving the cursor projects a ray onto an invisible ground plane; sprites
//! near the hit point are pushed away, scaled by each ring's amplitude.
//!
//! Run with: `cargo run --example triple_ring`

use dustring::prelude::*;

fn main() {
    env_logger::init();

    let scene = Scene::triple_ring();
    let sprite = SpriteConfig::load_or_fallback("assets/particle.png");

    if let Err(e) = run(scene, sprite) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
