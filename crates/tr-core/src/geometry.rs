//! Tile coordinates and continuous pixel-space geometry.
//!
//! Pixel positions use `f64` so that a train moving a constant step per frame
//! never accumulates rounding drift; renderers truncate with
//! [`Point::truncate`].

/// Integer grid coordinates of a tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePos {
    pub x: u32,
    pub y: u32,
}

impl TilePos {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The neighboring position on `side`, or `None` when it would be
    /// negative.  Upper bounds are the grid's business.
    #[inline]
    pub fn step(self, side: crate::Direction) -> Option<TilePos> {
        let (dx, dy) = side.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(TilePos { x, y })
    }

    /// Manhattan distance in tiles.
    #[inline]
    pub fn manhattan(self, other: TilePos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position in pixel space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn translate(self, v: Vector) -> Point {
        Point { x: self.x + v.dx, y: self.y + v.dy }
    }

    /// Integer pixel coordinates for drawing and grid comparisons.
    #[inline]
    pub fn truncate(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A displacement in pixel space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Displacement from `from` to `to`.
    #[inline]
    pub fn between(from: Point, to: Point) -> Vector {
        Vector { dx: to.x - from.x, dy: to.y - from.y }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Unit vector in the same direction; `ZERO` for a zero-length input.
    pub fn normalized(self) -> Vector {
        let len = self.length();
        if len <= f64::EPSILON {
            return Vector::ZERO;
        }
        Vector { dx: self.dx / len, dy: self.dy / len }
    }

    #[inline]
    pub fn scale(self, k: f64) -> Vector {
        Vector { dx: self.dx * k, dy: self.dy * k }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}
