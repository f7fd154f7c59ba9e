//! Full-state snapshots for persistence.
//!
//! A snapshot holds everything needed to resume a game except the RNG
//! stream, which is re-seeded from the config seed mixed with the frame
//! number.  An in-progress drag gesture is not captured.

use log::info;

use tr_core::{Frame, GameConfig, GameRng};
use tr_map::TrackMap;

use crate::builder::check_dimensions;
use crate::{Phase, Score, SimError, SimResult, Spawner, Train, World};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub config:          GameConfig,
    pub map:             TrackMap,
    pub trains:          Vec<Train>,
    pub next_train_id:   u32,
    pub spawn_countdown: u32,
    pub score:           Score,
    pub phase:           Phase,
    pub frame:           Frame,
}

impl World {
    /// Capture the full state.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            config:          self.config.clone(),
            map:             self.map.clone(),
            trains:          self.trains.clone(),
            next_train_id:   self.next_train_id,
            spawn_countdown: self.spawner.countdown(),
            score:           self.score,
            phase:           self.phase,
            frame:           self.frame,
        }
    }

    /// Rebuild a world from a snapshot.
    ///
    /// # Errors
    /// [`SimError::Config`] for an invalid config, and
    /// [`SimError::SnapshotMismatch`] when the map does not fit the config,
    /// its cells are missing or misplaced, its links are inconsistent, or a
    /// train refers to an empty tile.
    pub fn restore(snapshot: WorldSnapshot) -> SimResult<World> {
        let WorldSnapshot {
            config,
            mut map,
            trains,
            next_train_id,
            spawn_countdown,
            score,
            phase,
            frame,
        } = snapshot;

        config.validate().map_err(|e| SimError::Config(e.to_string()))?;
        check_dimensions(&config, &map).map_err(SimError::SnapshotMismatch)?;
        if let Some(issue) = map.check_topology().into_iter().next() {
            return Err(SimError::SnapshotMismatch(issue.to_string()));
        }
        if let Some(t) = trains.iter().find(|t| map.get(t.current()).is_none()) {
            return Err(SimError::SnapshotMismatch(format!(
                "train {} is on empty tile {}",
                t.id(),
                t.current()
            )));
        }
        if let Some(t) = trains.iter().find(|t| t.id().0 >= next_train_id) {
            return Err(SimError::SnapshotMismatch(format!(
                "train {} is not below the next id {next_train_id}",
                t.id()
            )));
        }
        map.cancel_drag();

        info!("restored world at {frame} with {} train(s)", trains.len());
        Ok(World {
            rng: GameRng::resumed(config.seed, frame.0),
            config,
            map,
            trains,
            next_train_id,
            spawner: Spawner::with_countdown(spawn_countdown),
            score,
            phase,
            frame,
        })
    }
}
