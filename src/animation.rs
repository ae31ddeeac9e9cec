use crate::mesh::PlaneMesh;

pub const TIME_STEP: f64 = 0.01;
pub const AMPLITUDE: f32 = 0.025;

/// Per-frame undulation of the animated terrain.
///
/// Only x moves: `x = x0 + cos(time + phase.0) * AMPLITUDE`, with `x0` taken
/// from the mesh's post-noise snapshot. Meshes without a phase table are
/// left untouched.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    /// f64: an f32 accumulator stops moving by `TIME_STEP` past 2^18.
    pub time: f64,
    pub paused: bool,
}

impl AnimationDriver {
    pub fn tick(&mut self, mesh: &mut PlaneMesh) {
        if self.paused || mesh.phases.is_none() {
            return;
        }
        self.time += TIME_STEP;
        Self::apply_at(self.time, mesh);
    }

    pub fn apply_at(time: f64, mesh: &mut PlaneMesh) {
        let Some(phases) = &mesh.phases else { return };

        for ((position, original), phase) in mesh
            .positions
            .iter_mut()
            .zip(&mesh.original_positions)
            .zip(phases)
        {
            position[0] = original[0] + (time + phase[0] as f64).cos() as f32 * AMPLITUDE;
        }
        mesh.positions_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::mesh::GridConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mesh(variant: Variant) -> PlaneMesh {
        let config = GridConfig {
            width: 10.0,
            height: 10.0,
            width_segments: 6,
            height_segments: 6,
        };
        PlaneMesh::build(config, variant, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_tick_advances_time_and_moves_x_only() {
        let mut mesh = mesh(Variant::Animated);
        mesh.take_positions_dirty();
        let mut driver = AnimationDriver::default();

        driver.tick(&mut mesh);
        assert!((driver.time - TIME_STEP).abs() < 1e-12);
        assert!(mesh.take_positions_dirty());

        let phases = mesh.phases.clone().unwrap();
        for i in 0..mesh.vertex_count() {
            let expected = mesh.original_positions[i][0]
                + (driver.time + phases[i][0] as f64).cos() as f32 * AMPLITUDE;
            assert!((mesh.positions[i][0] - expected).abs() < 1e-6);
            assert_eq!(mesh.positions[i][1], mesh.original_positions[i][1]);
            assert_eq!(mesh.positions[i][2], mesh.original_positions[i][2]);
            assert!((mesh.positions[i][0] - mesh.original_positions[i][0]).abs() <= AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_same_time_same_output() {
        let mut mesh = mesh(Variant::Animated);
        AnimationDriver::apply_at(1.25, &mut mesh);
        let first = mesh.positions.clone();

        AnimationDriver::apply_at(7.5, &mut mesh);
        assert_ne!(mesh.positions, first);

        AnimationDriver::apply_at(1.25, &mut mesh);
        assert_eq!(mesh.positions, first);
    }

    #[test]
    fn test_static_variant_is_untouched() {
        let mut mesh = mesh(Variant::Static);
        mesh.take_positions_dirty();
        let before = mesh.positions.clone();
        let mut driver = AnimationDriver::default();

        driver.tick(&mut mesh);

        assert_eq!(driver.time, 0.0);
        assert_eq!(mesh.positions, before);
        assert!(!mesh.positions_dirty);
    }

    #[test]
    fn test_time_keeps_advancing_after_long_runs() {
        let mut mesh = mesh(Variant::Animated);
        let mut driver = AnimationDriver {
            time: 262_144.0,
            ..Default::default()
        };

        driver.tick(&mut mesh);
        assert!(driver.time > 262_144.0);
        assert!((driver.time - 262_144.01).abs() < 1e-6);
    }

    #[test]
    fn test_paused_driver_freezes_time() {
        let mut mesh = mesh(Variant::Animated);
        let mut driver = AnimationDriver {
            paused: true,
            ..Default::default()
        };
        driver.tick(&mut mesh);
        assert_eq!(driver.time, 0.0);
    }
}
