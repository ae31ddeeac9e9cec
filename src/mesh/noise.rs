use rand::Rng;

use crate::config::Variant;

const BUMP_HEIGHT: f32 = 0.6;
const IN_PLANE_JITTER: f32 = 1.1;
const OUT_OF_PLANE_JITTER: f32 = 10.0;
const PHASE_RANGES: [f32; 3] = [3.0, 3.0, 4.0];

/// Displaces every vertex of a flat grid in place.
///
/// `Variant::Static` only lifts z by `[0, 0.6)`. `Variant::Animated` jitters
/// x and y by `[-0.55, 0.55)`, z by `[-5, 5)`, and returns one phase triple
/// per vertex for the undulation.
pub fn apply_noise<R: Rng + ?Sized>(
    positions: &mut [[f32; 3]],
    variant: Variant,
    rng: &mut R,
) -> Option<Vec<[f32; 3]>> {
    match variant {
        Variant::Static => {
            for p in positions.iter_mut() {
                p[2] += rng.random::<f32>() * BUMP_HEIGHT;
            }
            None
        }
        Variant::Animated => {
            let mut phases = Vec::with_capacity(positions.len());
            for p in positions.iter_mut() {
                p[0] += (rng.random::<f32>() - 0.5) * IN_PLANE_JITTER;
                p[1] += (rng.random::<f32>() - 0.5) * IN_PLANE_JITTER;
                p[2] += (rng.random::<f32>() - 0.5) * OUT_OF_PLANE_JITTER;

                phases.push(PHASE_RANGES.map(|range| rng.random::<f32>() * range));
            }
            Some(phases)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::GridConfig;
    use crate::mesh::grid::generate_grid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn flat() -> Vec<[f32; 3]> {
        generate_grid(&GridConfig {
            width: 24.0,
            height: 24.0,
            width_segments: 25,
            height_segments: 25,
        })
        .positions
    }

    #[test]
    fn test_static_bump_only_lifts_z() {
        let original = flat();
        let mut positions = original.clone();
        let phases = apply_noise(&mut positions, Variant::Static, &mut StdRng::seed_from_u64(1));

        assert!(phases.is_none());
        for (before, after) in original.iter().zip(&positions) {
            assert_eq!(before[0], after[0]);
            assert_eq!(before[1], after[1]);
            let lift = after[2] - before[2];
            assert!((0.0..BUMP_HEIGHT).contains(&lift), "lift {lift} out of range");
        }
    }

    #[test]
    fn test_animated_offsets_within_bounds() {
        let original = flat();
        let mut positions = original.clone();
        let phases = apply_noise(&mut positions, Variant::Animated, &mut StdRng::seed_from_u64(2))
            .expect("animated variant records phases");

        for (before, after) in original.iter().zip(&positions) {
            assert!((after[0] - before[0]).abs() <= 0.55 + 1e-5);
            assert!((after[1] - before[1]).abs() <= 0.55 + 1e-5);
            assert!((after[2] - before[2]).abs() <= 5.0 + 1e-5);
        }

        assert_eq!(phases.len(), positions.len());
        for phase in &phases {
            assert!((0.0..3.0).contains(&phase[0]));
            assert!((0.0..3.0).contains(&phase[1]));
            assert!((0.0..4.0).contains(&phase[2]));
        }
    }

    #[test]
    fn test_same_seed_same_surface() {
        let mut a = flat();
        let mut b = flat();
        let pa = apply_noise(&mut a, Variant::Animated, &mut StdRng::seed_from_u64(9));
        let pb = apply_noise(&mut b, Variant::Animated, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_eq!(pa, pb);
    }
}
