//! Pointer-to-world projection.
//!
//! Converts cursor pixel coordinates to normalized device coordinates, casts
//! a ray through the camera, and intersects it with a fixed invisible ground
//! plane. The resulting world point drives the shader's mouse uniform in the
//! interactive variant.

use glam::{Vec2, Vec3};

/// Half-line from an origin along a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Horizontal plane `y = height`, never rendered.
#[derive(Debug, Clone, Copy)]
pub struct GroundPlane {
    pub height: f32,
}

impl GroundPlane {
    /// The plane through the origin.
    pub fn new() -> Self {
        Self { height: 0.0 }
    }

    /// Intersect a ray with the plane.
    ///
    /// Returns `None` when the ray is parallel to the plane or the
    /// intersection lies behind the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denom = ray.direction.y;
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (self.height - ray.origin.y) / denom;
        if t < 0.0 {
            return None;
        }
        Some(ray.origin + ray.direction * t)
    }
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert cursor pixel coordinates to normalized device coordinates.
///
/// X maps left-to-right onto [-1, 1]; Y is flipped so up is positive.
/// Width and height are clamped to at least 1.
pub fn ndc_from_pixels(position: Vec2, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new(
        (position.x / w) * 2.0 - 1.0,
        1.0 - (position.y / h) * 2.0,
    )
}

/// Shared pointer world point with the stale-point policy: a miss keeps the
/// previous value. Single writer (the cursor handler), single reader (the
/// frame loop), both on the event-loop thread.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    plane: GroundPlane,
    world_point: Vec3,
}

impl PointerTracker {
    /// Tracker over the ground plane at the origin.
    pub fn new() -> Self {
        Self {
            plane: GroundPlane::new(),
            world_point: Vec3::ZERO,
        }
    }

    /// Project a camera ray onto the ground plane, overwriting the shared
    /// point on a hit. Returns `true` if the point was updated.
    pub fn project(&mut self, ray: &Ray) -> bool {
        match self.plane.intersect(ray) {
            Some(point) => {
                self.world_point = point;
                true
            }
            None => false,
        }
    }

    /// Latest projected world point (possibly stale).
    #[inline]
    pub fn world_point(&self) -> Vec3 {
        self.world_point
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_center() {
        let ndc = ndc_from_pixels(Vec2::new(400.0, 300.0), 800, 600);
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }

    #[test]
    fn test_ndc_corners_and_y_flip() {
        let top_left = ndc_from_pixels(Vec2::ZERO, 800, 600);
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));

        let bottom_right = ndc_from_pixels(Vec2::new(800.0, 600.0), 800, 600);
        assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_ndc_zero_size_window() {
        let ndc = ndc_from_pixels(Vec2::new(10.0, 10.0), 0, 0);
        assert!(ndc.x.is_finite() && ndc.y.is_finite());
    }

    #[test]
    fn test_plane_hit() {
        let plane = GroundPlane::new();
        let ray = Ray {
            origin: Vec3::new(0.0, 2.0, 2.0),
            direction: Vec3::new(0.0, -1.0, -1.0).normalize(),
        };
        let hit = plane.intersect(&ray).unwrap();
        assert!((hit - Vec3::ZERO).length() < 1e-5);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = GroundPlane::new();
        let ray = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::X,
        };
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_hit_behind_origin_misses() {
        let plane = GroundPlane::new();
        let ray = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::Y,
        };
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_tracker_keeps_stale_point_on_miss() {
        let mut tracker = PointerTracker::new();
        let hit_ray = Ray {
            origin: Vec3::new(1.0, 1.0, 0.0),
            direction: Vec3::NEG_Y,
        };
        assert!(tracker.project(&hit_ray));
        let point = tracker.world_point();
        assert!((point - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);

        let miss_ray = Ray {
            origin: Vec3::new(5.0, 1.0, 5.0),
            direction: Vec3::X,
        };
        assert!(!tracker.project(&miss_ray));
        assert_eq!(tracker.world_point(), point);
    }
}
