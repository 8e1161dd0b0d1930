//! GPU-side data layouts: the per-cluster uniform block and the shared quad
//! vertex. Field order and padding must match `shader.wgsl` exactly.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::cluster::ClusterConfig;

/// Per-cluster shader uniform block.
///
/// `time` and `mouse` are rewritten every frame; the rest is fixed at
/// creation apart from `view_proj`/`resolution`, which follow the camera
/// and surface size.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ClusterUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub time: f32,
    pub mouse: [f32; 3],
    pub amplitude: f32,
    pub resolution: [f32; 2],
    pub point_size: f32,
    pub _pad: f32,
}

impl ClusterUniforms {
    /// Assemble the uniform block for one cluster at one frame.
    pub fn new(
        config: &ClusterConfig,
        view_proj: Mat4,
        resolution: Vec2,
        time: f32,
        mouse: Vec3,
    ) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            color: config.color.to_array(),
            time,
            mouse: mouse.to_array(),
            amplitude: config.amplitude,
            resolution: resolution.to_array(),
            point_size: config.point_size,
            _pad: 0.0,
        }
    }
}

/// One corner of the shared unit quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    pub corner: [f32; 2],
    pub uv: [f32; 2],
}

/// The shared base geometry: one unit quad, reused by every instance of
/// every cluster.
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [-0.5, -0.5], uv: [0.0, 1.0] },
    QuadVertex { corner: [0.5, -0.5], uv: [1.0, 1.0] },
    QuadVertex { corner: [-0.5, 0.5], uv: [0.0, 0.0] },
    QuadVertex { corner: [0.5, 0.5], uv: [1.0, 0.0] },
];

/// Index list for the unit quad (two triangles).
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];
