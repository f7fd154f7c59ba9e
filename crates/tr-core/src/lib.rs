//! `tr-core`: foundational types for the train routing puzzle engine.
//!
//! This crate is a dependency of every other `tr-*` crate.  It has no `tr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TileId`, `TrainId`                                   |
//! | [`direction`]   | `Direction` (L/R/U/D), opposite + adjacency pairs     |
//! | [`geometry`]    | `TilePos`, `Point`, `Vector` (versor maths)           |
//! | [`color`]       | `Color`, station and train colors                     |
//! | [`frame`]       | `Frame` counter                                       |
//! | [`config`]      | `GameConfig`, `RetentionPolicy`                       |
//! | [`rng`]         | `GameRng`                                             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types;        |
//! |         | required by `tr-output` snapshots.                         |

pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use config::{GameConfig, RetentionPolicy};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use frame::Frame;
pub use geometry::{Point, TilePos, Vector};
pub use ids::{TileId, TrainId};
pub use rng::GameRng;
