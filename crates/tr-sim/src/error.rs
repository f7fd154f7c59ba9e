use thiserror::Error;

use tr_map::MapError;

use crate::Phase;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("only allowed while {expected}, the game is {actual}")]
    WrongPhase {
        expected: Phase,
        actual:   Phase,
    },

    #[error("place the base station before starting")]
    MissingBaseStation,

    #[error("place at least one destination station before starting")]
    MissingStations,

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("snapshot cannot be restored: {0}")]
    SnapshotMismatch(String),
}

pub type SimResult<T> = Result<T, SimError>;
