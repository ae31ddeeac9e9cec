use glam::{Vec2, Vec3};

use crate::renderer::Camera;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Ray from the camera through a point given in normalized device
    /// coordinates.
    pub fn from_camera(ndc: Vec2, camera: &Camera) -> Self {
        let inv_view_proj = camera.view_projection_matrix().inverse();
        let far = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));

        Self {
            origin: camera.position,
            direction: (far - camera.position).normalize(),
        }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Möller–Trumbore intersection. Both faces count as hits.
/// Returns the distance along the ray.
pub fn intersect_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Parallel to the triangle's plane.
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > EPSILON).then_some(t)
}
