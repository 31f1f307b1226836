use crate::error::PolygonError;
use crate::grid::{CompressedGrid, Symbol};
use crate::vertex::{GridPos, Vertex};

/// Draws every polygon edge, in boundary order and wrapping from the last
/// vertex to the first, into a grid that already holds the corners.
///
/// Only the cells strictly between two corners are written, so corners are
/// never overwritten.
#[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
pub fn rasterize(grid: &mut CompressedGrid, vertices: &[Vertex]) -> Result<(), PolygonError> {
    let n = vertices.len();
    for (index, from) in vertices.iter().enumerate() {
        let next = (index + 1) % n;
        let to = &vertices[next];

        if !connect(grid, from.mapped, to.mapped) {
            return Err(PolygonError::NotRectilinear {
                index,
                next,
                from: from.original,
                to: to.original,
            });
        }
    }
    Ok(())
}

/// Returns `false` when `a` and `b` do not share exactly one axis.
fn connect(grid: &mut CompressedGrid, a: GridPos, b: GridPos) -> bool {
    match (a.x == b.x, a.y == b.y) {
        (true, false) => {
            for y in a.y.min(b.y) + 1..a.y.max(b.y) {
                draw(grid, a.x, y, Symbol::VerticalBorder);
            }
            true
        }
        (false, true) => {
            for x in a.x.min(b.x) + 1..a.x.max(b.x) {
                draw(grid, x, a.y, Symbol::HorizontalBorder);
            }
            true
        }
        _ => false,
    }
}

#[inline]
fn draw(grid: &mut CompressedGrid, x: usize, y: usize, symbol: Symbol) {
    if let Some(cell) = grid.get_mut(x, y) {
        if cell.symbol != Symbol::Corner {
            cell.symbol = symbol;
        }
    }
}
