//! Scene controller.
//!
//! Owns the explicit list of cluster configurations, the sampled instance
//! positions, the frame clock, and the shared pointer world point. Per-frame
//! uniform derivation is a pure function of the camera's view-projection and
//! the surface resolution, so the whole update rule is testable without a
//! GPU.

use glam::{Mat4, Vec2, Vec3};

use crate::clock::FrameClock;
use crate::cluster::{sample_positions, ClusterConfig, UnitRandom};
use crate::pointer::{PointerTracker, Ray};
use crate::uniforms::ClusterUniforms;

/// Mouse stand-in for the non-interactive variant: far enough above the
/// field that the repulsion term in the shader is identically zero.
const FAR_POINT: Vec3 = Vec3::new(0.0, 1.0e6, 0.0);

/// A cluster and its immutable, once-sampled instance positions.
#[derive(Debug, Clone)]
pub struct ClusterInstance {
    pub config: ClusterConfig,
    /// Dense x/y/z triples, `3 * config.count` floats.
    pub positions: Vec<f32>,
}

/// The demo scene: clusters, clock, pointer state.
#[derive(Debug, Clone)]
pub struct Scene {
    clusters: Vec<ClusterInstance>,
    clock: FrameClock,
    pointer: PointerTracker,
    interactive: bool,
    title: &'static str,
}

impl Scene {
    /// Build a scene from cluster configs, sampling positions with the
    /// given random source.
    pub fn with_rng(
        configs: Vec<ClusterConfig>,
        interactive: bool,
        title: &'static str,
        rng: &mut impl UnitRandom,
    ) -> Self {
        let clusters = configs
            .into_iter()
            .map(|config| {
                let positions = sample_positions(&config, rng);
                ClusterInstance { config, positions }
            })
            .collect();
        Self {
            clusters,
            clock: FrameClock::new(),
            pointer: PointerTracker::new(),
            interactive,
            title,
        }
    }

    /// Build a scene with a thread-local random source.
    pub fn new(configs: Vec<ClusterConfig>, interactive: bool, title: &'static str) -> Self {
        Self::with_rng(configs, interactive, title, &mut rand::thread_rng())
    }

    /// Variant 1: a single white ring, no pointer interaction.
    pub fn single_ring() -> Self {
        Self::new(
            vec![ClusterConfig::ring(0.5, 1.0)],
            false,
            "dustring - single ring",
        )
    }

    /// Variant 2: three nested tinted rings distorted by the mouse point.
    pub fn triple_ring() -> Self {
        Self::new(
            vec![
                ClusterConfig::ring(0.55, 0.85)
                    .with_color(Vec3::new(1.0, 0.42, 0.21))
                    .with_point_size(7.0)
                    .with_amplitude(1.0),
                ClusterConfig::ring(0.9, 1.2)
                    .with_color(Vec3::new(0.58, 0.35, 0.98))
                    .with_point_size(9.0)
                    .with_amplitude(1.5),
                ClusterConfig::ring(1.25, 1.55)
                    .with_color(Vec3::new(0.25, 0.85, 0.95))
                    .with_point_size(6.0)
                    .with_amplitude(2.0),
            ],
            true,
            "dustring - triple ring",
        )
    }

    /// Clusters with their sampled positions.
    #[inline]
    pub fn clusters(&self) -> &[ClusterInstance] {
        &self.clusters
    }

    /// Whether the pointer drives the mouse uniform.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Window title for this configuration.
    #[inline]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// The animation clock.
    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Mutable clock access for stop/start.
    #[inline]
    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    /// Advance the clock by one fixed step. Returns `false` while stopped,
    /// in which case no uniforms should be written and no draw submitted.
    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    /// Project a camera ray onto the ground plane, updating the shared
    /// pointer point on a hit (stale value kept on a miss).
    pub fn project_pointer(&mut self, ray: &Ray) -> bool {
        self.pointer.project(ray)
    }

    /// Latest pointer world point.
    #[inline]
    pub fn pointer_point(&self) -> Vec3 {
        self.pointer.world_point()
    }

    /// Derive the uniform block for every cluster at the current frame.
    pub fn cluster_uniforms(&self, view_proj: Mat4, resolution: Vec2) -> Vec<ClusterUniforms> {
        let time = self.clock.shader_time();
        let mouse = if self.interactive {
            self.pointer.world_point()
        } else {
            FAR_POINT
        };
        self.clusters
            .iter()
            .map(|cluster| ClusterUniforms::new(&cluster.config, view_proj, resolution, time, mouse))
            .collect()
    }
}
