//! Shader and scene integration tests.
//!
//! The WGSL program is validated with naga so layout or syntax breakage is
//! caught without a GPU.

use dustring::cluster::ClusterConfig;
use dustring::scene::Scene;
use dustring::shader::SHADER_SOURCE;
use dustring::{Vec2, Vec3};
use glam::Mat4;

/// Validates WGSL code using naga.
fn validate_wgsl(code: &str) -> Result<(), String> {
    let module = naga::front::wgsl::parse_str(code)
        .map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(())
}

#[test]
fn test_sprite_shader_validates() {
    validate_wgsl(SHADER_SOURCE).expect("Sprite shader should be valid WGSL");
}

#[test]
fn test_shader_declares_expected_uniforms() {
    // Uniform names are part of the material's observable contract.
    for name in [
        "view_proj",
        "color",
        "time",
        "mouse",
        "amplitude",
        "resolution",
        "point_size",
    ] {
        assert!(
            SHADER_SOURCE.contains(name),
            "shader is missing uniform '{}'",
            name
        );
    }
}

#[test]
fn test_empty_cluster_scene_builds() {
    // count = 0 must flow through uniform derivation without crashing; the
    // renderer skips the draw entirely.
    let scene = Scene::new(
        vec![ClusterConfig::ring(0.5, 1.0).with_count(0)],
        false,
        "empty",
    );
    assert_eq!(scene.clusters()[0].positions.len(), 0);

    let uniforms = scene.cluster_uniforms(Mat4::IDENTITY, Vec2::new(640.0, 480.0));
    assert_eq!(uniforms.len(), 1);
}

#[test]
fn test_uniform_derivation_matches_clock_and_pointer() {
    use dustring::Ray;

    let mut scene = Scene::triple_ring();
    for _ in 0..10 {
        scene.tick();
    }
    scene.project_pointer(&Ray {
        origin: Vec3::new(0.25, 2.0, -0.75),
        direction: Vec3::NEG_Y,
    });

    let uniforms = scene.cluster_uniforms(Mat4::IDENTITY, Vec2::new(1280.0, 720.0));
    assert_eq!(uniforms.len(), 3);
    for u in &uniforms {
        assert!((u.time - 0.05 * 10.0 * 0.5).abs() < 1e-5);
        assert_eq!(u.mouse, [0.25, 0.0, -0.75]);
        assert_eq!(u.resolution, [1280.0, 720.0]);
    }
}
