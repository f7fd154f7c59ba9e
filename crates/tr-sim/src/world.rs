//! The `World` aggregate and its frame loop.

use std::fmt;

use log::{debug, info};

use tr_core::{Color, CoreResult, Frame, GameConfig, GameRng, RetentionPolicy, TileId, TilePos, TrainId};
use tr_map::TrackMap;

use crate::{ScoreDelta, SimError, SimResult, Spawner, Train, TrainStatus, WorldObserver};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Game phase.  The map is editable only during `Setup`; trains run and
/// switches toggle only while `Running`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Setup,
    Running,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Setup   => "in setup",
            Phase::Running => "running",
        })
    }
}

// ── Score / reports ───────────────────────────────────────────────────────────

/// Correct and wrong station arrivals so far.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub correct: u64,
    pub wrong:   u64,
}

impl Score {
    pub fn record(&mut self, delta: ScoreDelta) {
        match delta {
            ScoreDelta::Correct => self.correct += 1,
            ScoreDelta::Wrong   => self.wrong += 1,
            ScoreDelta::Neutral => {}
        }
    }

    /// `correct - wrong`.
    pub fn net(&self) -> i64 {
        self.correct as i64 - self.wrong as i64
    }
}

/// A train entering a station.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Arrival {
    pub train:         TrainId,
    pub train_color:   Color,
    pub station:       TileId,
    pub station_color: Color,
    pub delta:         ScoreDelta,
}

/// What happened during one [`World::step`].
#[derive(Clone, PartialEq, Debug)]
pub struct FrameReport {
    pub frame:    Frame,
    pub spawned:  Option<TrainId>,
    pub arrivals: Vec<Arrival>,
    pub stranded: Vec<TrainId>,
}

impl FrameReport {
    /// Sum of this frame's score deltas.
    pub fn delta(&self) -> i32 {
        self.arrivals.iter().map(|a| a.delta.value()).sum()
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The whole game state: map, trains, score, phase and frame clock.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder] or
/// [`World::restore`].
pub struct World {
    pub(crate) config:        GameConfig,
    pub(crate) map:           TrackMap,
    /// In creation order; also the advancement order within a frame.
    pub(crate) trains:        Vec<Train>,
    pub(crate) next_train_id: u32,
    pub(crate) spawner:       Spawner,
    pub(crate) rng:           GameRng,
    pub(crate) score:         Score,
    pub(crate) phase:         Phase,
    pub(crate) frame:         Frame,
}

impl World {
    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn map(&self) -> &TrackMap {
        &self.map
    }

    #[inline]
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn train(&self, id: TrainId) -> Option<&Train> {
        self.trains.iter().find(|t| t.id() == id)
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The frame the next [`step`](Self::step) will simulate.
    #[inline]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Trains still moving or waiting to move.
    pub fn active_trains(&self) -> usize {
        self.trains.iter().filter(|t| t.status().is_active()).count()
    }

    /// Tile under a pointer position, in pixels.
    pub fn pixel_to_tile(&self, x: i32, y: i32) -> CoreResult<TilePos> {
        self.config.tile_at_pixel(x, y)
    }

    // ── Phase control ─────────────────────────────────────────────────────

    /// Mutable access to the map; only granted during setup.
    pub fn edit(&mut self) -> SimResult<&mut TrackMap> {
        self.require(Phase::Setup)?;
        Ok(&mut self.map)
    }

    /// Place a station with a random unused color, drawn from the world RNG.
    pub fn add_station(&mut self, pos: TilePos) -> SimResult<TileId> {
        self.require(Phase::Setup)?;
        Ok(self.map.add_station(pos, &mut self.rng)?)
    }

    /// Leave setup and start running trains.
    ///
    /// # Errors
    /// [`SimError::MissingBaseStation`] / [`SimError::MissingStations`] when
    /// the map cannot spawn or receive trains.
    pub fn start(&mut self) -> SimResult<()> {
        self.require(Phase::Setup)?;
        if self.map.base_station().is_none() {
            return Err(SimError::MissingBaseStation);
        }
        if self.map.stations().is_empty() {
            return Err(SimError::MissingStations);
        }
        self.map.cancel_drag();
        self.phase = Phase::Running;
        info!(
            "game started with {} station(s) on a {}x{} map",
            self.map.stations().len(),
            self.config.map_width,
            self.config.map_height
        );
        Ok(())
    }

    /// Swap the branches of the switch at `pos`.  Only while running.
    pub fn toggle_switch(&mut self, pos: TilePos) -> SimResult<()> {
        self.require(Phase::Running)?;
        Ok(self.map.toggle_switch(pos)?)
    }

    pub(crate) fn require(&self, expected: Phase) -> SimResult<()> {
        if self.phase != expected {
            return Err(SimError::WrongPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Simulate one frame: spawn check, then advance every train in creation
    /// order, then report the score and apply the retention policy.
    pub fn step<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<FrameReport> {
        self.require(Phase::Running)?;
        let frame = self.frame;
        observer.on_frame_start(frame);
        let mut report = FrameReport { frame, spawned: None, arrivals: Vec::new(), stranded: Vec::new() };

        // ── Spawn ─────────────────────────────────────────────────────────
        let active = self.active_trains();
        let colors = self.map.station_colors();
        if let Some(color) = self.spawner.tick(active, &colors, &mut self.rng, &self.config) {
            let base_id = self.map.base_station().ok_or(SimError::MissingBaseStation)?;
            let base = self.map.get(base_id).ok_or(SimError::MissingBaseStation)?;
            let train = Train::new(TrainId(self.next_train_id), color, base_id, base);
            self.next_train_id += 1;
            info!("{frame}: spawned {color} train {}", train.id());
            observer.on_spawn(frame, &train);
            report.spawned = Some(train.id());
            self.trains.push(train);
        }

        // ── Advance ───────────────────────────────────────────────────────
        let step = self.config.train_step;
        for train in &mut self.trains {
            if train.status().is_terminal() {
                continue;
            }
            let delta = train.advance(&self.map, step);
            match train.status() {
                TrainStatus::InHomeStation | TrainStatus::InWrongStation => {
                    let Some(station_color) = self.map.get(train.current()).and_then(|e| e.station_color())
                    else {
                        continue;
                    };
                    report.arrivals.push(Arrival {
                        train: train.id(),
                        train_color: train.color(),
                        station: train.current(),
                        station_color,
                        delta,
                    });
                }
                TrainStatus::Stranded => report.stranded.push(train.id()),
                TrainStatus::InBase | TrainStatus::EnRoute => {}
            }
        }

        // ── Score ─────────────────────────────────────────────────────────
        // Every train has moved by now; scoring sees the whole frame.
        for arrival in &report.arrivals {
            self.score.record(arrival.delta);
            observer.on_arrival(frame, arrival);
        }
        for id in &report.stranded {
            if let Some(train) = self.train(*id) {
                observer.on_stranded(frame, train);
            }
        }

        observer.on_frame_end(frame, &self.score);
        self.retain_trains();
        self.frame = frame.next();
        Ok(report)
    }

    /// Run `n` frames, stopping at the first error.
    pub fn run_frames<O: WorldObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Score> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(self.score)
    }

    fn retain_trains(&mut self) {
        let before = self.trains.len();
        match self.config.retention {
            RetentionPolicy::KeepAll => {}
            RetentionPolicy::DropArrived => self.trains.retain(|t| !t.status().is_arrived()),
            RetentionPolicy::DropTerminal => self.trains.retain(|t| !t.status().is_terminal()),
        }
        let dropped = before - self.trains.len();
        if dropped > 0 {
            debug!("{}: dropped {dropped} finished train(s)", self.frame);
        }
    }
}
