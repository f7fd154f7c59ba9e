//! Trains and the per-frame advancement rule.
//!
//! A train is not part of the grid.  It remembers the element it is
//! currently traversing by [`TileId`] and moves along that element's versor
//! at a constant speed.  Positions are kept in `f64`; only [`Train::pixel`]
//! truncates, so a fractional per-frame step never accumulates rounding
//! error.

use log::{info, warn};

use tr_core::{Color, Point, TileId, TrainId};
use tr_map::{End, MapElement, TrackMap};

// ── TrainStatus ───────────────────────────────────────────────────────────────

/// Lifecycle of a train: `InBase → EnRoute → {InHomeStation | InWrongStation
/// | Stranded}`.  The last three are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainStatus {
    InBase,
    EnRoute,
    Stranded,
    InHomeStation,
    InWrongStation,
}

impl TrainStatus {
    /// `true` once the status can never change again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TrainStatus::Stranded | TrainStatus::InHomeStation | TrainStatus::InWrongStation
        )
    }

    /// `true` for trains that count against the spawn cap.
    #[inline]
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    /// `true` if the train entered a station (of either color).
    #[inline]
    pub fn is_arrived(self) -> bool {
        matches!(self, TrainStatus::InHomeStation | TrainStatus::InWrongStation)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrainStatus::InBase         => "in_base",
            TrainStatus::EnRoute        => "en_route",
            TrainStatus::Stranded       => "stranded",
            TrainStatus::InHomeStation  => "home",
            TrainStatus::InWrongStation => "wrong",
        }
    }
}

// ── ScoreDelta ────────────────────────────────────────────────────────────────

/// Score effect of one [`Train::advance`] call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreDelta {
    /// Entered a station of another color: −1.
    Wrong,
    /// Moved, turned onto the next element, or stopped: 0.
    #[default]
    Neutral,
    /// Entered the station of its own color: +1.
    Correct,
}

impl ScoreDelta {
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            ScoreDelta::Wrong   => -1,
            ScoreDelta::Neutral => 0,
            ScoreDelta::Correct => 1,
        }
    }
}

// ── Train ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Train {
    id:       TrainId,
    color:    Color,
    position: Point,
    current:  TileId,
    status:   TrainStatus,
}

impl Train {
    /// A new train waiting at the base station `base` (stored at `base_id`).
    pub fn new(id: TrainId, color: Color, base_id: TileId, base: &MapElement) -> Self {
        Self {
            id,
            color,
            position: base.center(),
            current: base_id,
            status: TrainStatus::InBase,
        }
    }

    #[inline]
    pub fn id(&self) -> TrainId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Exact sub-pixel position.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Integer pixel position for drawing.
    #[inline]
    pub fn pixel(&self) -> (i32, i32) {
        self.position.truncate()
    }

    /// The element the train is on.
    #[inline]
    pub fn current(&self) -> TileId {
        self.current
    }

    #[inline]
    pub fn status(&self) -> TrainStatus {
        self.status
    }

    /// Advance the train by `step` pixels along its current element.
    ///
    /// While the remaining distance to the element's `end2` point covers the
    /// step on both axes the train simply moves.  Otherwise it crosses onto
    /// the next element: a station ends the journey with a score, any other
    /// element snaps the train to that element's `end1` point.  With no next
    /// element, or a degenerate (zero) versor, the train is stranded.
    ///
    /// Terminal trains are left untouched.
    pub fn advance(&mut self, map: &TrackMap, step: f64) -> ScoreDelta {
        if self.status.is_terminal() {
            return ScoreDelta::Neutral;
        }
        self.status = TrainStatus::EnRoute;

        let Some(tile) = map.get(self.current) else {
            warn!("train {} lost its element at {}", self.id, self.current);
            return self.strand();
        };
        let versor = tile.versor();
        let Some(target) = tile.end_point(End::Downstream).filter(|_| !versor.is_zero()) else {
            warn!("train {} stranded on degenerate geometry at {}", self.id, tile.tile());
            return self.strand();
        };

        let d = versor.scale(step);
        let remaining_x = (target.x - self.position.x).abs();
        let remaining_y = (target.y - self.position.y).abs();
        if remaining_x >= d.dx.abs() && remaining_y >= d.dy.abs() {
            self.position = self.position.translate(d);
            return ScoreDelta::Neutral;
        }

        let Some((next_id, next)) = tile.next().and_then(|id| Some((id, map.get(id)?))) else {
            info!("train {} stranded at dead end {}", self.id, tile.tile());
            return self.strand();
        };
        self.current = next_id;
        match next.station_color() {
            Some(color) if color == self.color => {
                self.status = TrainStatus::InHomeStation;
                info!("train {} ({}) reached its station at {}", self.id, self.color, next.tile());
                ScoreDelta::Correct
            }
            Some(color) => {
                self.status = TrainStatus::InWrongStation;
                info!("train {} ({}) entered the {color} station at {}", self.id, self.color, next.tile());
                ScoreDelta::Wrong
            }
            None => {
                self.position = next.end_point(End::Upstream).unwrap_or(target);
                ScoreDelta::Neutral
            }
        }
    }

    fn strand(&mut self) -> ScoreDelta {
        self.status = TrainStatus::Stranded;
        ScoreDelta::Neutral
    }
}
