//! Particle cluster configuration and torus position sampling.
//!
//! A cluster is one instanced draw call: `count` sprites whose positions are
//! sampled once from a noisy annulus and never re-sampled. The two demo
//! variants are just different lists of clusters (see [`crate::scene::Scene`]).

use glam::Vec3;
use rand::Rng;

/// Default particle count per cluster.
pub const DEFAULT_COUNT: u32 = 10_000;

/// Configuration for one particle cluster. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of instanced sprites.
    pub count: u32,
    /// Inner radius of the annulus.
    pub min_radius: f32,
    /// Outer radius of the annulus.
    pub max_radius: f32,
    /// Sprite tint (RGB, 0.0-1.0).
    pub color: Vec3,
    /// Sprite size in pixels.
    pub point_size: f32,
    /// Strength of the time wobble and mouse repulsion in the shader.
    pub amplitude: f32,
}

impl ClusterConfig {
    /// A ring with the given radii and the default count, white, mid-size.
    pub fn ring(min_radius: f32, max_radius: f32) -> Self {
        Self {
            count: DEFAULT_COUNT,
            min_radius,
            max_radius,
            color: Vec3::ONE,
            point_size: 8.0,
            amplitude: 1.0,
        }
    }

    /// Set the sprite tint.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Set the sprite size in pixels.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Set the distortion amplitude.
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the instance count.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// Source of uniform random draws in `[0, 1)`.
///
/// Production code uses the `rand` impls below; tests script exact draw
/// sequences instead.
pub trait UnitRandom {
    /// Next uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f32;
}

impl UnitRandom for rand::rngs::ThreadRng {
    fn unit(&mut self) -> f32 {
        self.gen_range(0.0..1.0)
    }
}

impl UnitRandom for rand::rngs::StdRng {
    fn unit(&mut self) -> f32 {
        self.gen_range(0.0..1.0)
    }
}

/// Sample instance positions for a cluster.
///
/// Per particle, in draw order: `angle ~ U(0, 2pi)`,
/// `radius = lerp(min_radius, max_radius, U(0, 1))`, and a vertical jitter
/// of `(U(0, 1) - 0.5) * 0.2`. The result is a dense `3 * count` float
/// buffer (x, y, z per instance) ready for GPU upload. `count == 0` yields
/// an empty buffer.
pub fn sample_positions(config: &ClusterConfig, rng: &mut impl UnitRandom) -> Vec<f32> {
    let mut positions = Vec::with_capacity(config.count as usize * 3);
    for _ in 0..config.count {
        let angle = rng.unit() * std::f32::consts::TAU;
        let radius = lerp(config.min_radius, config.max_radius, rng.unit());
        let x = radius * angle.sin();
        let y = (rng.unit() - 0.5) * 0.2;
        let z = radius * angle.cos();
        positions.extend_from_slice(&[x, y, z]);
    }
    positions
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays back a scripted sequence of unit draws.
    struct Scripted {
        draws: Vec<f32>,
        next: usize,
    }

    impl Scripted {
        fn new(draws: &[f32]) -> Self {
            Self {
                draws: draws.to_vec(),
                next: 0,
            }
        }
    }

    impl UnitRandom for Scripted {
        fn unit(&mut self) -> f32 {
            let v = self.draws[self.next];
            self.next += 1;
            v
        }
    }

    #[test]
    fn test_buffer_length() {
        let config = ClusterConfig::ring(0.5, 1.0).with_count(137);
        let mut rng = rand::thread_rng();
        let positions = sample_positions(&config, &mut rng);
        assert_eq!(positions.len(), 137 * 3);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let config = ClusterConfig::ring(0.5, 1.0).with_count(0);
        let mut rng = rand::thread_rng();
        let positions = sample_positions(&config, &mut rng);
        assert!(positions.is_empty());
    }

    #[test]
    fn test_radial_and_vertical_bounds() {
        let config = ClusterConfig::ring(0.5, 1.0).with_count(5000);
        let mut rng = rand::thread_rng();
        let positions = sample_positions(&config, &mut rng);

        for p in positions.chunks_exact(3) {
            let radial = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!(
                radial >= config.min_radius - 1e-4 && radial <= config.max_radius + 1e-4,
                "radial distance {} outside [{}, {}]",
                radial,
                config.min_radius,
                config.max_radius
            );
            assert!(p[1].abs() <= 0.1 + 1e-6, "vertical jitter {} out of range", p[1]);
        }
    }

    #[test]
    fn test_scripted_positions() {
        // Per particle the draws are angle_t, radius_t, y_t.
        let mut rng = Scripted::new(&[
            0.0, 0.0, 0.5, // angle 0, radius 1.0, y 0
            0.5, 0.5, 0.5, // angle pi, radius 1.5, y 0
            0.9, 0.9, 0.5, // angle 1.8pi, radius 1.9, y 0
        ]);
        let config = ClusterConfig::ring(1.0, 2.0).with_count(3);
        let positions = sample_positions(&config, &mut rng);
        assert_eq!(positions.len(), 9);

        let tau = std::f32::consts::TAU;
        let expected = [
            (0.0f32, 1.0f32),
            (0.5 * tau, 1.5),
            (0.9 * tau, 1.9),
        ];
        for (i, (angle, radius)) in expected.iter().enumerate() {
            let p = &positions[i * 3..i * 3 + 3];
            assert!((p[0] - radius * angle.sin()).abs() < 1e-5, "x mismatch at {}", i);
            assert!(p[1].abs() < 1e-6, "y mismatch at {}", i);
            assert!((p[2] - radius * angle.cos()).abs() < 1e-5, "z mismatch at {}", i);
        }
    }

    #[test]
    fn test_builder_methods() {
        let config = ClusterConfig::ring(0.5, 1.0)
            .with_color(Vec3::new(0.9, 0.1, 0.1))
            .with_point_size(12.0)
            .with_amplitude(2.5)
            .with_count(42);
        assert_eq!(config.count, 42);
        assert_eq!(config.point_size, 12.0);
        assert_eq!(config.amplitude, 2.5);
        assert_eq!(config.color.x, 0.9);
    }
}
