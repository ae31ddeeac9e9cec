pub mod pointer;
pub mod ray;

use glam::Vec3;

use crate::mesh::PlaneMesh;
use crate::renderer::Camera;
pub use pointer::PointerState;
pub use ray::{Ray, intersect_triangle};

/// Nearest triangle under the pointer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    pub face_index: usize,
    pub vertices: [u32; 3],
    pub distance: f32,
    pub point: Vec3,
}

/// Casts the pointer ray against every triangle of `mesh` and returns the
/// closest hit. An undefined pointer or an empty ray are both "no hit".
pub fn pick(pointer: &PointerState, camera: &Camera, mesh: &PlaneMesh) -> Option<HitResult> {
    let ndc = pointer.ndc()?;
    let ray = Ray::from_camera(ndc, camera);
    pick_with_ray(&ray, mesh)
}

pub fn pick_with_ray(ray: &Ray, mesh: &PlaneMesh) -> Option<HitResult> {
    let mut nearest: Option<HitResult> = None;

    for face_index in 0..mesh.triangle_count() {
        let vertices = mesh.triangle(face_index);
        let [v0, v1, v2] = vertices.map(|i| Vec3::from_array(mesh.positions[i as usize]));

        let Some(distance) = intersect_triangle(ray, v0, v1, v2) else {
            continue;
        };
        if nearest.is_some_and(|hit| hit.distance <= distance) {
            continue;
        }

        nearest = Some(HitResult {
            face_index,
            vertices,
            distance,
            point: ray.point_at(distance),
        });
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::mesh::GridConfig;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn flat_mesh() -> PlaneMesh {
        let config = GridConfig {
            width: 2.0,
            height: 2.0,
            width_segments: 2,
            height_segments: 2,
        };
        let mut mesh = PlaneMesh::build(config, Variant::Static, &mut StdRng::seed_from_u64(0));
        mesh.positions = mesh.original_positions.iter().map(|p| [p[0], p[1], 0.0]).collect();
        mesh
    }

    fn project(camera: &Camera, p: Vec3) -> Vec2 {
        camera.view_projection_matrix().project_point3(p).truncate()
    }

    #[test]
    fn test_undefined_pointer_is_no_hit() {
        let mesh = flat_mesh();
        assert!(pick(&PointerState::default(), &Camera::new(5.0), &mesh).is_none());
    }

    #[test]
    fn test_pointer_off_the_mesh_is_no_hit() {
        let mesh = flat_mesh();
        let camera = Camera::new(5.0);
        let pointer = PointerState(Some(project(&camera, Vec3::new(3.0, 3.0, 0.0))));
        assert!(pick(&pointer, &camera, &mesh).is_none());
    }

    #[test]
    fn test_pointer_on_triangle_centroid_names_its_vertices() {
        let mesh = flat_mesh();
        let camera = Camera::new(5.0);

        for face in 0..mesh.triangle_count() {
            let vertices = mesh.triangle(face);
            let centroid = vertices
                .iter()
                .map(|&i| Vec3::from_array(mesh.positions[i as usize]))
                .sum::<Vec3>()
                / 3.0;

            let pointer = PointerState(Some(project(&camera, centroid)));
            let hit = pick(&pointer, &camera, &mesh).expect("centroid must hit");

            assert_eq!(hit.face_index, face);
            assert_eq!(hit.vertices, vertices);
            assert!((hit.point - centroid).length() < 1e-3);
        }
    }

    #[test]
    fn test_hit_follows_displaced_geometry() {
        let mut mesh = flat_mesh();
        let [a, b, d] = mesh.triangle(0);
        for i in [a, b, d] {
            mesh.positions[i as usize][2] = 1.0;
        }

        let ray = Ray {
            origin: Vec3::new(-0.6, 0.6, 5.0),
            direction: Vec3::NEG_Z,
        };
        let hit = pick_with_ray(&ray, &mesh).unwrap();
        assert_eq!(hit.face_index, 0);
        assert!((hit.distance - 4.0).abs() < 1e-4);
    }
}
