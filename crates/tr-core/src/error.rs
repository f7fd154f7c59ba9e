//! Engine-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::TilePos;

/// The error type for `tr-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("tiles {from} and {to} are not edge-adjacent")]
    NotAdjacent { from: TilePos, to: TilePos },

    #[error("pixel ({x}, {y}) is outside the map")]
    OutOfBounds { x: i32, y: i32 },
}

/// Shorthand result type for `tr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
