use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::AnimationDriver;
use crate::config::{Settings, Variant};
use crate::highlight::HoverHighlighter;
use crate::mesh::{GridConfig, PlaneMesh};
use crate::picking::{HitResult, PointerState, pick};
use crate::renderer::Camera;

/// Everything the per-frame step reads or writes, owned in one place.
pub struct Scene {
    pub variant: Variant,
    pub grid: GridConfig,
    pub mesh: PlaneMesh,
    pub animation: AnimationDriver,
    pub highlighter: HoverHighlighter,
    pub pointer: PointerState,
    pub last_hit: Option<HitResult>,
    rng: StdRng,
}

impl Scene {
    pub fn new(variant: Variant, grid: GridConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mesh = PlaneMesh::build(grid, variant, &mut rng);

        Self {
            variant,
            grid,
            mesh,
            animation: AnimationDriver::default(),
            highlighter: HoverHighlighter::default(),
            pointer: PointerState::default(),
            last_hit: None,
            rng,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.variant, settings.grid, settings.seed)
    }

    /// Rebuilds the mesh from the current grid configuration. Running
    /// highlights refer to the old vertex indices and are dropped.
    pub fn regenerate(&mut self) {
        self.grid = self.variant.limits().clamp(self.grid);
        self.highlighter.clear();
        self.last_hit = None;
        self.mesh.rebuild(self.grid, &mut self.rng);
    }

    /// One display refresh: animate, pick against the animated surface,
    /// start a highlight on a hit.
    pub fn frame(&mut self, camera: &Camera) -> Option<HitResult> {
        self.animation.tick(&mut self.mesh);

        let hit = pick(&self.pointer, camera, &self.mesh);
        if let Some(hit) = &hit {
            if self.last_hit.map(|h| h.face_index) != Some(hit.face_index) {
                tracing::debug!("Hovering face {} ({:?})", hit.face_index, hit.vertices);
            }
            self.highlighter.on_hit(hit, &mut self.mesh);
        }
        self.last_hit = hit;
        hit
    }

    /// Steps running color tweens by `dt` seconds of real time.
    pub fn advance_tweens(&mut self, dt: f32) {
        self.highlighter.step(dt, &mut self.mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{BASE_TINT, HOVER_TINT};

    fn start_config() -> GridConfig {
        GridConfig {
            width: 24.0,
            height: 24.0,
            width_segments: 25,
            height_segments: 25,
        }
    }

    #[test]
    fn test_panel_change_rebuilds_mesh() {
        let mut scene = Scene::new(Variant::Static, start_config(), 1);
        assert_eq!(scene.mesh.vertex_count(), 676);

        scene.grid.width_segments = 10;
        scene.regenerate();

        assert_eq!(scene.mesh.vertex_count(), 286);
        assert_eq!(scene.mesh.colors.len(), 286);
        assert!(scene.mesh.colors.iter().all(|c| *c == BASE_TINT));
    }

    #[test]
    fn test_regenerate_clamps_to_variant_limits() {
        let mut scene = Scene::new(Variant::Static, start_config(), 1);
        scene.grid.height_segments = 90;
        scene.regenerate();
        assert_eq!(scene.grid.height_segments, 30);
        assert_eq!(scene.mesh.vertex_count(), 26 * 31);
    }

    #[test]
    fn test_frame_without_pointer_has_no_hit() {
        let mut scene = Scene::new(Variant::Animated, start_config(), 2);
        let camera = Camera::new(40.0);
        assert!(scene.frame(&camera).is_none());
        assert!(scene.animation.time > 0.0);
        assert_eq!(scene.highlighter.active(), 0);
    }

    #[test]
    fn test_hover_highlights_and_fades() {
        let mut scene = Scene::new(Variant::Static, start_config(), 3);
        let camera = Camera::new(5.0);
        scene.pointer = PointerState(Some(glam::Vec2::new(0.05, 0.03)));

        let hit = scene.frame(&camera).expect("center of the plane is under the cursor");
        for v in hit.vertices {
            assert_eq!(scene.mesh.colors[v as usize], HOVER_TINT);
        }
        assert!(hit.point.truncate().length() < 1.0);

        scene.pointer.clear();
        scene.advance_tweens(0.5);
        scene.advance_tweens(0.6);
        for v in hit.vertices {
            assert_eq!(scene.mesh.colors[v as usize], BASE_TINT);
        }
    }

    #[test]
    fn test_regenerate_drops_running_highlights() {
        let mut scene = Scene::new(Variant::Static, start_config(), 4);
        scene.pointer = PointerState(Some(glam::Vec2::new(0.05, 0.03)));
        scene.frame(&Camera::new(5.0));
        assert_eq!(scene.highlighter.active(), 1);

        scene.regenerate();
        assert_eq!(scene.highlighter.active(), 0);
        assert!(scene.last_hit.is_none());
    }
}
