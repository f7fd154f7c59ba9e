//! Relative direction tokens for a 4-connected grid.
//!
//! A `Direction` names the side of a tile an element connects through.
//! Screen coordinates are used throughout: `Up` decreases `y`.

use crate::{CoreError, CoreResult, TilePos};

/// One of the four sides of a tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fixed enumeration order used by every scan over the four sides.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The side facing this one across a tile boundary.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
        }
    }

    /// Unit grid offset `(dx, dy)` of the neighbor on this side.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
        }
    }

    /// Direction pair for moving from `from` into the edge-adjacent `to`.
    ///
    /// Returns `(exit, entry)`: `exit` is the side of `from` that faces `to`,
    /// `entry` is the side of `to` that faces back at `from`.  A straight
    /// segment entering through `entry` leaves through `entry.opposite()`,
    /// which equals `exit`.
    ///
    /// # Errors
    /// [`CoreError::NotAdjacent`] for identical or diagonal tiles.
    pub fn between(from: TilePos, to: TilePos) -> CoreResult<(Direction, Direction)> {
        let dx = to.x as i64 - from.x as i64;
        let dy = to.y as i64 - from.y as i64;
        let exit = match (dx, dy) {
            (1, 0)  => Direction::Right,
            (-1, 0) => Direction::Left,
            (0, 1)  => Direction::Down,
            (0, -1) => Direction::Up,
            _ => return Err(CoreError::NotAdjacent { from, to }),
        };
        Ok((exit, exit.opposite()))
    }

    /// Single-letter label, matching the usual L/R/U/D notation.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left  => "L",
            Direction::Right => "R",
            Direction::Up    => "U",
            Direction::Down  => "D",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
