pub mod tween;

use std::collections::HashMap;

use crate::mesh::{BASE_TINT, HOVER_TINT, PlaneMesh};
use crate::picking::HitResult;
use tween::{Tween, Tweener};

pub const HIGHLIGHT_DURATION: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HighlightTarget {
    id: u64,
    vertices: [u32; 3],
    generation: u64,
}

/// Fades hit triangles from the hover tint back to the base tint.
///
/// Every hit starts its own tween. A vertex is written only by the most
/// recent highlight that touched it; older tweens keep running but skip
/// vertices they no longer own.
#[derive(Default)]
pub struct HoverHighlighter {
    tweens: Tweener<HighlightTarget>,
    owners: HashMap<u32, u64>,
    next_id: u64,
}

impl HoverHighlighter {
    pub fn on_hit(&mut self, hit: &HitResult, mesh: &mut PlaneMesh) {
        let id = self.next_id;
        self.next_id += 1;

        let tween = Tween::new(HOVER_TINT, BASE_TINT, HIGHLIGHT_DURATION);
        for &v in &hit.vertices {
            self.owners.insert(v, id);
            mesh.set_color(v, tween.value());
        }

        self.tweens.start(
            tween,
            HighlightTarget {
                id,
                vertices: hit.vertices,
                generation: mesh.generation,
            },
        );
    }

    /// Advances all running highlights by `dt` seconds of real time.
    pub fn step(&mut self, dt: f32, mesh: &mut PlaneMesh) {
        if self.tweens.is_empty() {
            return;
        }

        let owners = &self.owners;
        let finished = self.tweens.advance(dt, |target, color| {
            if target.generation != mesh.generation {
                return;
            }
            for &v in &target.vertices {
                if owners.get(&v) == Some(&target.id) {
                    mesh.set_color(v, color);
                }
            }
        });

        for target in finished {
            for v in target.vertices {
                if self.owners.get(&v) == Some(&target.id) {
                    self.owners.remove(&v);
                }
            }
        }
    }

    /// Drops every running highlight; used when the mesh is rebuilt.
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.owners.clear();
    }

    pub fn active(&self) -> usize {
        self.tweens.len()
    }

    #[cfg(test)]
    pub fn owned_vertices(&self) -> usize {
        self.owners.len()
    }
}
