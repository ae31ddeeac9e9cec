use crate::mesh::GridConfig;

/// Flat grid in the XY plane (z = 0), centered on the origin.
pub struct FlatGrid {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Builds a `(width_segments + 1) * (height_segments + 1)` vertex grid.
///
/// Rows run from the top edge (y = +height/2) downward, columns from the
/// left edge (x = -width/2) to the right. Each cell yields two triangles
/// `(a, b, d)` and `(b, c, d)` where `a` is the cell's top-left vertex,
/// `b` bottom-left, `c` bottom-right and `d` top-right.
pub fn generate_grid(config: &GridConfig) -> FlatGrid {
    let cols = config.width_segments.max(1);
    let rows = config.height_segments.max(1);
    let stride = cols + 1;

    let seg_w = config.width / cols as f32;
    let seg_h = config.height / rows as f32;
    let half_w = config.width / 2.0;
    let half_h = config.height / 2.0;

    let mut positions = Vec::with_capacity((stride * (rows + 1)) as usize);
    for iy in 0..=rows {
        let y = half_h - iy as f32 * seg_h;
        for ix in 0..=cols {
            let x = ix as f32 * seg_w - half_w;
            positions.push([x, y, 0.0]);
        }
    }

    let mut indices = Vec::with_capacity((cols * rows * 6) as usize);
    for iy in 0..rows {
        for ix in 0..cols {
            let a = ix + stride * iy;
            let b = ix + stride * (iy + 1);
            let c = b + 1;
            let d = a + 1;

            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    FlatGrid { positions, indices }
}
