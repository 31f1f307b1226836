use std::fmt;

/// A dense 2D grid wrapper for flattened vectors, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid2D<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(&self.data[y * self.width + x])
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(&mut self.data[y * self.width + x])
        }
    }

    /// Cells of row `y`, left to right. Empty when out of bounds.
    pub fn row(&self, y: usize) -> &[T] {
        if y >= self.height {
            &[]
        } else {
            &self.data[y * self.width..(y + 1) * self.width]
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks_exact(0)` panics, and a zero-width grid has no cells anyway.
        self.data.chunks_exact(self.width.max(1))
    }
}

/// What the rasterizer drew into a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    #[default]
    Empty,
    Corner,
    VerticalBorder,
    HorizontalBorder,
}

impl Symbol {
    /// Whether a top-down sweep crosses the polygon boundary at this cell.
    /// Vertical borders run along the sweep, so they never toggle it.
    #[inline]
    pub fn crosses_column(self) -> bool {
        matches!(self, Symbol::Corner | Symbol::HorizontalBorder)
    }

    fn as_char(self) -> char {
        match self {
            Symbol::Empty => '.',
            Symbol::Corner => 'X',
            Symbol::VerticalBorder => '|',
            Symbol::HorizontalBorder => '-',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub symbol: Symbol,
    /// Rows of polygon, this one included, directly above the cell without
    /// leaving the current column run. Zero outside the polygon.
    pub relative_height: usize,
}

/// The rasterized polygon in compressed coordinates.
pub type CompressedGrid = Grid2D<Cell>;

impl fmt::Display for Grid2D<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}({})", cell.symbol, cell.relative_height)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_row_major() {
        let mut grid = Grid2D::<u8>::new(3, 2);
        *grid.get_mut(2, 1).unwrap() = 7;
        assert_eq!(Some(&7), grid.get(2, 1));
        assert_eq!(&[0, 0, 7], grid.row(1));
        assert_eq!(None, grid.get(3, 0));
        assert_eq!(None, grid.get(0, 2));
        assert!(grid.get_mut(0, 2).is_none());
    }

    #[test]
    fn rows_of_empty_grid() {
        let grid = Grid2D::<u8>::new(0, 0);
        assert_eq!(0, grid.rows().count());
        assert!(grid.row(0).is_empty());
    }

    #[test]
    fn renders_symbols_and_heights() {
        let mut grid = CompressedGrid::new(2, 2);
        *grid.get_mut(0, 0).unwrap() = Cell {
            symbol: Symbol::Corner,
            relative_height: 1,
        };
        *grid.get_mut(1, 1).unwrap() = Cell {
            symbol: Symbol::HorizontalBorder,
            relative_height: 2,
        };
        assert_eq!("X(1) .(0)\n.(0) -(2)\n", grid.to_string());
    }
}
