pub mod grid;
pub mod noise;

use rand::Rng;

use crate::config::Variant;
use grid::generate_grid;
use noise::apply_noise;

pub const BASE_TINT: [f32; 3] = [0.19, 0.40, 0.00];
pub const HOVER_TINT: [f32; 3] = [0.20, 0.24, 0.10];

/// User-editable extents and subdivision of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

/// CPU-side state of the plane: the live vertex and color buffers together
/// with the post-noise snapshot and phase table the animation reads.
pub struct PlaneMesh {
    pub variant: Variant,
    pub config: GridConfig,

    pub positions: Vec<[f32; 3]>,
    pub original_positions: Vec<[f32; 3]>,
    pub phases: Option<Vec<[f32; 3]>>,
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,

    pub positions_dirty: bool,
    pub colors_dirty: bool,
    /// Bumped on every rebuild. Anything holding vertex indices compares
    /// against it before touching the buffers.
    pub generation: u64,
}

impl PlaneMesh {
    pub fn build<R: Rng + ?Sized>(config: GridConfig, variant: Variant, rng: &mut R) -> Self {
        let mut mesh = Self {
            variant,
            config,
            positions: Vec::new(),
            original_positions: Vec::new(),
            phases: None,
            colors: Vec::new(),
            indices: Vec::new(),
            positions_dirty: false,
            colors_dirty: false,
            generation: 0,
        };
        mesh.rebuild(config, rng);
        mesh
    }

    /// Replaces all geometry with a freshly perturbed grid for `config`.
    pub fn rebuild<R: Rng + ?Sized>(&mut self, config: GridConfig, rng: &mut R) {
        let grid = generate_grid(&config);
        let mut positions = grid.positions;
        let phases = apply_noise(&mut positions, self.variant, rng);

        self.config = config;
        self.original_positions = positions.clone();
        self.colors = vec![BASE_TINT; positions.len()];
        self.positions = positions;
        self.phases = phases;
        self.indices = grid.indices;

        self.positions_dirty = true;
        self.colors_dirty = true;
        self.generation += 1;

        tracing::info!(
            "Built {:?} plane {}x{} with {}x{} segments: {} vertices, {} triangles",
            self.variant,
            config.width,
            config.height,
            config.width_segments,
            config.height_segments,
            self.vertex_count(),
            self.triangle_count()
        );
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangle(&self, face: usize) -> [u32; 3] {
        let i = face * 3;
        [self.indices[i], self.indices[i + 1], self.indices[i + 2]]
    }

    pub fn set_color(&mut self, vertex: u32, color: [f32; 3]) {
        if let Some(slot) = self.colors.get_mut(vertex as usize) {
            *slot = color;
            self.colors_dirty = true;
        }
    }

    pub fn take_positions_dirty(&mut self) -> bool {
        std::mem::take(&mut self.positions_dirty)
    }

    pub fn take_colors_dirty(&mut self) -> bool {
        std::mem::take(&mut self.colors_dirty)
    }
}
