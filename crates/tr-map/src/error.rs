//! Map-editing error type.
//!
//! Every variant is an expected, recoverable outcome of a player action: the
//! map is left unchanged and the `Display` text is suitable for a popup.

use thiserror::Error;

use tr_core::{Color, CoreError, TilePos};

/// Errors produced by `tr-map`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapError {
    #[error("tile {0} is outside the map")]
    OutOfBounds(TilePos),

    #[error("tile {0} is already occupied")]
    Occupied(TilePos),

    #[error("tile {0} is empty")]
    Empty(TilePos),

    #[error("tile {0} does not hold a switch")]
    NotASwitch(TilePos),

    #[error("no more station colors available")]
    StationColorsExhausted,

    #[error("a {0} station already exists")]
    ColorInUse(Color),

    #[error("no track drag in progress")]
    NoDrag,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type MapResult<T> = Result<T, MapError>;
