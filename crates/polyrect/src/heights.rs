use crate::grid::CompressedGrid;

/// Store, for every cell, how many rows of polygon lie directly above it in
/// the same column, itself included.
///
/// Each column is swept top-down. A corner or horizontal border while
/// outside opens a run at height 1; inside a run every cell is one taller than
/// the cell above it, and the next corner or horizontal border closes the run
/// (keeping its height, since the boundary is part of the polygon). Cells
/// outside every run are 0.
///
/// With this table a rectangle covering rows `min_y..=max_y` is contained
/// iff each of its columns reaches at least `max_y - min_y + 1` at `max_y`.
#[tracing::instrument(skip_all, fields(columns = grid.width(), rows = grid.height()))]
pub fn annotate(grid: &mut CompressedGrid) {
    for x in 0..grid.width() {
        let mut inside = false;
        let mut above = 0;
        for y in 0..grid.height() {
            let Some(cell) = grid.get_mut(x, y) else {
                continue;
            };
            let boundary = cell.symbol.crosses_column();

            cell.relative_height = if inside {
                above + 1
            } else if boundary {
                1
            } else {
                0
            };

            if boundary {
                // A boundary seen while outside opens a run, while inside it closes one.
                inside = !inside;
            }
            above = cell.relative_height;
        }
    }
}
