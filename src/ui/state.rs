use crate::config::{Settings, Variant};
use crate::mesh::GridConfig;
use crate::renderer::CameraMode;
use crate::scene::Scene;

pub struct UiState {
    pub variant: Variant,
    /// Slider-backed copy of the grid; applied to the scene when it changes.
    pub grid: GridConfig,

    pub camera_mode: CameraMode,
    pub vsync_enabled: bool,
    pub animation_paused: bool,

    pub show_stats: bool,
}

impl UiState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            variant: settings.variant,
            grid: settings.grid,
            camera_mode: CameraMode::Orbital,
            vsync_enabled: settings.window.vsync,
            animation_paused: false,
            show_stats: true,
        }
    }
}

/// Numbers shown in the statistics block, sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub fps: f32,
    pub vertices: usize,
    pub triangles: usize,
    pub highlights: usize,
    pub hovered_face: Option<usize>,
    pub time: f32,
}

impl FrameStats {
    pub fn sample(scene: &Scene, fps: f32) -> Self {
        Self {
            fps,
            vertices: scene.mesh.vertex_count(),
            triangles: scene.mesh.triangle_count(),
            highlights: scene.highlighter.active(),
            hovered_face: scene.last_hit.map(|hit| hit.face_index),
            time: scene.animation.time as f32,
        }
    }
}
