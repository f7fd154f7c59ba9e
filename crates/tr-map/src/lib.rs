//! `tr-map`: the editable track grid and its connectivity engine.
//!
//! The map is a fixed `width × height` grid where each tile holds at most one
//! [`MapElement`].  Elements link to their neighbors by [`TileId`][tr_core::TileId]
//! handles; the [`TrackMap`] methods are the only way to mutate links and keep
//! them bidirectional at every step.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`element`]  | `MapElement`, `ElementKind`, `End`, `Branch`               |
//! | [`grid`]     | `Grid`, tile storage and adjacency                         |
//! | [`map`]      | `TrackMap`: grid + base station / station registries       |
//! | [`connect`]  | neighbor search and auto-wiring                            |
//! | [`place`]    | placement, erasure, switch toggling                        |
//! | [`drag`]     | drag-chain track laying                                    |
//! | [`topology`] | `TopologyIssue`, `TrackMap::check_topology`                |
//! | [`error`]    | `MapError`, `MapResult<T>`                                 |
//!
//! # Neighbor priority
//!
//! | Search     | Rank 0                  | Rank 1                  | Rank 2                     |
//! |------------|-------------------------|-------------------------|----------------------------|
//! | upstream   | base station, no next   | track/switch, no next   | switch, free inactive slot |
//! | downstream | track/switch, no prev   | station, no prev        | n/a                        |
//!
//! Ties are broken by side, in `Left, Right, Up, Down` order.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod connect;
pub mod drag;
pub mod element;
pub mod error;
pub mod grid;
pub mod map;
pub mod place;
pub mod topology;

#[cfg(test)]
mod tests;

pub use connect::Flow;
pub use drag::DragChain;
pub use element::{Branch, ElementKind, End, MapElement};
pub use error::{MapError, MapResult};
pub use grid::Grid;
pub use map::TrackMap;
pub use topology::TopologyIssue;
