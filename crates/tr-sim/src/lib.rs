//! `tr-sim`: trains, spawning, scoring and the frame loop.
//!
//! # Frame loop
//!
//! ```text
//! World::step (Running phase only):
//!   ① Spawn:    when the countdown has elapsed and fewer than
//!                max_active_trains are active, place a train of a random
//!                station color at the base station.
//!   ② Advance:  Train::advance for every non-terminal train, in creation
//!                order; arrivals score +1 / −1, dead ends strand.
//!   ③ Report:   observer callbacks, then the retention policy drops
//!                finished trains.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`train`]    | `Train`, `TrainStatus`, `ScoreDelta`                     |
//! | [`spawner`]  | `Spawner` countdown                                      |
//! | [`world`]    | `World`, `Phase`, `Score`, `Arrival`, `FrameReport`      |
//! | [`builder`]  | `WorldBuilder`                                           |
//! | [`command`]  | `Command`, `CommandOutcome`, `Notice`                    |
//! | [`snapshot`] | `WorldSnapshot`, `World::snapshot` / `World::restore`    |
//! | [`observer`] | `WorldObserver`, `NoopObserver`                          |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tr_core::{GameConfig, TilePos};
//! use tr_sim::{Command, NoopObserver, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(GameConfig::default()).build()?;
//! world.apply(Command::PlaceBaseStation(TilePos::new(2, 2)));
//! world.apply(Command::PlaceStation(TilePos::new(2, 5)));
//! world.apply(Command::BeginDrag(TilePos::new(2, 2)));
//! world.apply(Command::DragTo(TilePos::new(2, 5)));
//! world.apply(Command::EndDrag);
//! world.apply(Command::Start);
//! world.run_frames(600, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod command;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod spawner;
pub mod train;
pub mod world;


pub use builder::WorldBuilder;
pub use command::{Command, CommandOutcome, Notice};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use snapshot::WorldSnapshot;
pub use spawner::Spawner;
pub use train::{ScoreDelta, Train, TrainStatus};
pub use world::{Arrival, FrameReport, Phase, Score, World};
