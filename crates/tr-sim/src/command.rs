//! Discrete input commands and the player-facing notices they produce.
//!
//! The input layer translates pointer and keyboard events into [`Command`]s.
//! [`World::apply`] never fails: invalid placements are silently ignored
//! (the map stays unchanged), and the few conditions a player must be told
//! about come back as a [`Notice`].

use std::fmt;

use log::{debug, warn};

use tr_core::TilePos;
use tr_map::MapError;

use crate::{Phase, SimError, SimResult, World};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    PlaceBaseStation(TilePos),
    PlaceStation(TilePos),
    PlaceTrack(TilePos),
    PlaceSwitch(TilePos),
    BeginDrag(TilePos),
    DragTo(TilePos),
    EndDrag,
    Erase(TilePos),
    Toggle(TilePos),
    Start,
}

/// A message for the player.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Notice {
    LastStation,
    StationColorsExhausted,
    MissingBaseStation,
    MissingStations,
    WrongPhase(Phase),
}

impl Notice {
    /// Stable identifier, e.g. for localisation tables.
    pub fn key(self) -> &'static str {
        match self {
            Notice::LastStation            => "last_station",
            Notice::StationColorsExhausted => "station_colors_exhausted",
            Notice::MissingBaseStation     => "missing_base_station",
            Notice::MissingStations        => "missing_stations",
            Notice::WrongPhase(_)          => "wrong_phase",
        }
    }

    /// The notice a rejected command should show, if any.
    fn for_error(err: &SimError) -> Option<Notice> {
        match err {
            SimError::MissingBaseStation => Some(Notice::MissingBaseStation),
            SimError::MissingStations => Some(Notice::MissingStations),
            SimError::WrongPhase { actual, .. } => Some(Notice::WrongPhase(*actual)),
            SimError::Map(MapError::StationColorsExhausted) => Some(Notice::StationColorsExhausted),
            _ => None,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LastStation            => f.write_str("this was the last station available"),
            Notice::StationColorsExhausted => f.write_str("no more station colors available"),
            Notice::MissingBaseStation     => f.write_str("place the base station before starting"),
            Notice::MissingStations        => {
                f.write_str("place at least one destination station before starting")
            }
            Notice::WrongPhase(phase)      => write!(f, "not available while the game is {phase}"),
        }
    }
}

/// Result of [`World::apply`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CommandOutcome {
    /// `false` if the command left the world unchanged.
    pub accepted: bool,
    pub notice:   Option<Notice>,
}

impl World {
    /// Execute one input command.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match self.execute(command) {
            Ok(notice) => CommandOutcome { accepted: true, notice },
            Err(err) => {
                let notice = Notice::for_error(&err);
                if notice.is_some() {
                    warn!("{command:?} rejected: {err}");
                } else {
                    debug!("{command:?} ignored: {err}");
                }
                CommandOutcome { accepted: false, notice }
            }
        }
    }

    fn execute(&mut self, command: Command) -> SimResult<Option<Notice>> {
        match command {
            Command::PlaceBaseStation(pos) => {
                self.edit()?.add_base_station(pos)?;
            }
            Command::PlaceStation(pos) => {
                self.add_station(pos)?;
                if self.map.station_colors_exhausted() {
                    return Ok(Some(Notice::LastStation));
                }
            }
            Command::PlaceTrack(pos) => {
                self.edit()?.add_track(pos)?;
            }
            Command::PlaceSwitch(pos) => {
                self.edit()?.add_switch(pos)?;
            }
            Command::BeginDrag(pos) => {
                self.edit()?.begin_drag(pos)?;
            }
            Command::DragTo(pos) => {
                self.edit()?.drag_to(pos)?;
            }
            Command::EndDrag => {
                self.edit()?.end_drag()?;
            }
            Command::Erase(pos) => {
                self.edit()?.erase(pos)?;
            }
            Command::Toggle(pos) => self.toggle_switch(pos)?,
            Command::Start => self.start()?,
        }
        Ok(None)
    }
}
