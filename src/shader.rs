//! Embedded WGSL program for the instanced sprite material.

/// The vertex/fragment program pair consumed by the render pipeline.
pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");
