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
