//! Orbit camera for viewing the particle field.

use glam::{Mat4, Vec2, Vec3};

use crate::pointer::Ray;

/// Orbit camera: spherical coordinates around a target point plus a
/// perspective projection.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    aspect: f32,
}

impl OrbitCamera {
    /// Create a camera with the demo's default framing: eye near (0, 2, 2)
    /// looking at the origin with a 70 degree field of view.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: std::f32::consts::FRAC_PI_4,
            distance: 2.0 * std::f32::consts::SQRT_2,
            target: Vec3::ZERO,
            fov_y: 70.0_f32.to_radians(),
            near: 0.01,
            far: 1000.0,
            aspect: 1.0,
        }
    }

    /// Recompute the aspect ratio from a surface size in pixels.
    ///
    /// Width and height are clamped to at least 1 so a zero-sized viewport
    /// cannot produce a NaN or infinite aspect.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Current aspect ratio.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        proj * self.view_matrix()
    }

    /// Cast a ray from the camera through a point in normalized device
    /// coordinates (x, y in [-1, 1], y up).
    pub fn screen_ray(&self, ndc: Vec2) -> Ray {
        let origin = self.position();
        let inv = self.view_proj().inverse();
        // The far-plane point lies on the ray and keeps the subtraction
        // well-conditioned.
        let far_point = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray {
            origin,
            direction: (far_point - origin).normalize(),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_is_exact_ratio() {
        let mut camera = OrbitCamera::new();
        camera.set_aspect(1280, 720);
        assert_eq!(camera.aspect(), 1280.0 / 720.0);
    }

    #[test]
    fn test_zero_height_clamps() {
        let mut camera = OrbitCamera::new();
        camera.set_aspect(800, 0);
        assert!(camera.aspect().is_finite());
        assert_eq!(camera.aspect(), 800.0);

        camera.set_aspect(0, 0);
        assert_eq!(camera.aspect(), 1.0);
    }

    #[test]
    fn test_default_position_matches_sketch() {
        let camera = OrbitCamera::new();
        let pos = camera.position();
        assert!((pos.x - 0.0).abs() < 1e-5);
        assert!((pos.y - 2.0).abs() < 1e-5);
        assert!((pos.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let mut camera = OrbitCamera::new();
        camera.set_aspect(800, 600);
        let ray = camera.screen_ray(Vec2::ZERO);
        let expected = (camera.target - camera.position()).normalize();
        assert!((ray.direction - expected).length() < 1e-3);
        assert!((ray.origin - camera.position()).length() < 1e-5);
    }

    #[test]
    fn test_view_proj_is_finite() {
        let mut camera = OrbitCamera::new();
        camera.set_aspect(1, 1);
        let vp = camera.view_proj();
        for v in vp.to_cols_array() {
            assert!(v.is_finite());
        }
    }
}
