use itertools::Itertools;

use crate::grid::CompressedGrid;
use crate::vertex::{inclusive_area, Area, GridPos, Vertex};

/// Result of [`largest_contained`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Largest contained rectangle, 0 when there is none.
    pub area: Area,
    /// Vertex indices of the first pair that reached `area`.
    pub corners: Option<(usize, usize)>,
    /// Pairs that needed a containment scan.
    pub scanned: usize,
    /// Pairs skipped because they could not beat either vertex's best.
    pub pruned: usize,
}

/// Finds the largest rectangle with two vertices as opposite corners that
/// lies inside the polygon.
///
/// `grid` must be rasterized and annotated. Every pair of vertices is visited
/// once; a pair is only scanned when its area beats the best rectangle
/// already validated for *both* of its vertices, and each success raises
/// `max_size` on both.
#[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
pub fn largest_contained(grid: &CompressedGrid, vertices: &mut [Vertex]) -> Evaluation {
    let mut best = Evaluation::default();
    if vertices.len() < 2 {
        return best;
    }

    for (i, j) in (0..vertices.len()).tuple_combinations() {
        let candidate = inclusive_area(vertices[i].original, vertices[j].original);
        if candidate <= vertices[i].max_size || candidate <= vertices[j].max_size {
            best.pruned += 1;
            continue;
        }

        best.scanned += 1;
        if !is_contained(grid, vertices[i].mapped, vertices[j].mapped) {
            continue;
        }

        vertices[i].max_size = candidate;
        vertices[j].max_size = candidate;
        if candidate > best.area {
            best.area = candidate;
            best.corners = Some((i, j));
        }
    }

    tracing::debug!(
        area = %best.area,
        scanned = best.scanned,
        pruned = best.pruned,
        "evaluated vertex pairs"
    );
    best
}

/// Containment scan: walks the columns of the rectangle spanned by `a` and
/// `b` along its bottom row, stopping at the first one that does not reach
/// the top.
pub fn is_contained(grid: &CompressedGrid, a: GridPos, b: GridPos) -> bool {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
    let span = max_y - min_y + 1;

    match grid.row(max_y).get(min_x..=max_x) {
        Some(cells) => cells.iter().all(|c| c.relative_height >= span),
        None => false,
    }
}
