//! # dustring
//!
//! An animated instanced particle field: thousands of textured sprites
//! scattered over a noisy ring, billboarded on the GPU and distorted by a
//! time uniform and, in the interactive variant, a mouse ray projected onto
//! an invisible ground plane.
//!
//! ## Quick start
//!
//! ```ignore
//! use dustring::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     env_logger::init();
//!     let scene = Scene::triple_ring();
//!     let sprite = SpriteConfig::load_or_fallback("assets/particle.png");
//!     dustring::run(scene, sprite)
//! }
//! ```
//!
//! ## Structure
//!
//! - [`cluster`] samples torus-distributed instance positions once at
//!   startup; positions are immutable after upload.
//! - [`scene`] owns the cluster list, the fixed-step [`clock`], and the
//!   shared pointer point, and derives each frame's uniform blocks on the
//!   CPU.
//! - [`renderer`] holds the wgpu pipeline: one shared unit quad, one
//!   instance buffer and uniform block per cluster, alpha blending with
//!   depth testing disabled.
//! - [`window`] runs the winit event loop: redraw ticks the clock, cursor
//!   moves feed the orbit camera and the ground-plane projection, Space
//!   stops and restarts the animation.

pub mod camera;
pub mod clock;
pub mod cluster;
pub mod error;
pub mod pointer;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod sprite;
pub mod uniforms;
pub mod window;

pub use camera::OrbitCamera;
pub use clock::FrameClock;
pub use cluster::{sample_positions, ClusterConfig, UnitRandom};
pub use error::{GpuError, RunError, TextureError};
pub use glam::{Vec2, Vec3};
pub use pointer::{GroundPlane, PointerTracker, Ray};
pub use scene::Scene;
pub use sprite::SpriteConfig;
pub use uniforms::ClusterUniforms;
pub use window::run;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::camera::OrbitCamera;
    pub use crate::clock::FrameClock;
    pub use crate::cluster::ClusterConfig;
    pub use crate::error::RunError;
    pub use crate::scene::Scene;
    pub use crate::sprite::SpriteConfig;
    pub use crate::window::run;
    pub use crate::{Vec2, Vec3};
}
