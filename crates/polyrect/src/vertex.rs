use glam::I64Vec2;

/// A coordinate in the original (uncompressed) space.
pub type Point = I64Vec2;

/// Inclusive tile area. Wide enough for any pair of `i64` coordinates.
pub type Area = u128;

/// A position in the compressed grid: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A polygon corner, in boundary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub original: Point,
    /// Filled in by [`crate::compress::compress`].
    pub mapped: GridPos,
    /// Position in the boundary traversal; neighbours wrap around.
    pub original_index: usize,
    /// Largest validated rectangle that uses this vertex as a corner.
    pub max_size: Area,
}

impl Vertex {
    pub fn new(original_index: usize, original: Point) -> Self {
        Self {
            original,
            mapped: GridPos::default(),
            original_index,
            max_size: 0,
        }
    }
}

/// Area of the rectangle with opposite corners `a` and `b`, counting both
/// edges as part of it: `(|x1 - x2| + 1) * (|y1 - y2| + 1)`.
#[inline]
pub fn inclusive_area(a: Point, b: Point) -> Area {
    let w = (a.x - b.x).unsigned_abs() as Area + 1;
    let h = (a.y - b.y).unsigned_abs() as Area + 1;
    w * h
}
