use crate::grid::{CompressedGrid, Symbol};
use crate::vertex::{GridPos, Vertex};

/// Sorted distinct coordinates of one axis. A value's position in the table
/// is its compressed index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisMap {
    values: Vec<i64>,
}

impl AxisMap {
    pub fn new(coords: impl Iterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = coords.collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Compressed index of `value`. Exact for values present in the map,
    /// otherwise the index it would be inserted at.
    #[inline]
    pub fn index_of(&self, value: i64) -> usize {
        self.values.partition_point(|&v| v < value)
    }

    /// Original coordinate of a compressed index.
    #[inline]
    pub fn value_at(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Output of [`compress`]: both axis tables and a grid holding only corners.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub xs: AxisMap,
    pub ys: AxisMap,
    pub grid: CompressedGrid,
}

/// Maps every vertex onto a dense, order-preserving index space and allocates
/// a grid of `distinct y` rows by `distinct x` columns with the corners marked.
///
/// `vertices[i].original_index` must be `i`; mapped coordinates are written
/// back through it so callers keep boundary order.
#[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
pub fn compress(vertices: &mut [Vertex]) -> Compressed {
    let mut sorted = vertices.to_vec();
    sorted.sort_by_key(|v| v.original.x);
    for run in sorted.chunk_by_mut(|a, b| a.original.x == b.original.x) {
        run.sort_by_key(|v| v.original.y);
    }

    let ys = AxisMap::new(vertices.iter().map(|v| v.original.y));

    // One column per run of equal x.
    let mut xs = Vec::new();
    for run in sorted.chunk_by(|a, b| a.original.x == b.original.x) {
        let column = xs.len();
        xs.push(run[0].original.x);
        for v in run {
            let row = ys.index_of(v.original.y);
            vertices[v.original_index].mapped = GridPos::new(column, row);
        }
    }
    let xs = AxisMap { values: xs };

    let mut grid = CompressedGrid::new(xs.len(), ys.len());
    for v in vertices.iter() {
        if let Some(cell) = grid.get_mut(v.mapped.x, v.mapped.y) {
            cell.symbol = Symbol::Corner;
        }
    }

    tracing::debug!(columns = xs.len(), rows = ys.len(), "compressed grid");
    Compressed { xs, ys, grid }
}
