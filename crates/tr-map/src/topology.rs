//! Structural consistency checks over a [`TrackMap`].
//!
//! The editing engine is expected to keep these invariants after every
//! public call; the checker exists for tests and for validating restored
//! snapshots.

use std::fmt;

use tr_core::{Direction, TileId, TilePos};

use crate::{End, ElementKind, MapElement, TrackMap};

/// A single broken invariant found by [`TrackMap::check_topology`].
#[derive(Clone, Debug, PartialEq)]
pub enum TopologyIssue {
    /// `from` links through `end` to a tile with no element.
    DanglingLink { from: TilePos, end: End },
    /// `from` links to `to`, but `to` does not link back.
    OneWayLink { from: TilePos, to: TilePos },
    /// Linked elements are not adjacent across the linked side.
    NotAdjacent { from: TilePos, to: TilePos },
    /// The two ends of a link do not face each other.
    SideMismatch { from: TilePos, to: TilePos },
    /// A switch end is unresolved or shares a side with another end.
    BadSwitch(TilePos),
    /// A track segment whose ends are unresolved or coincide.
    BadTrack(TilePos),
    /// More than one base station, or the singleton disagrees with the grid.
    BaseStation,
    /// The station registry disagrees with the grid.
    StationRegistry,
    /// The grid stores a different number of cells than its dimensions imply.
    CellCount { expected: usize, actual: usize },
    /// The element in this cell claims another tile or carries geometry
    /// that does not derive from its cell.
    Misplaced(TilePos),
}

impl fmt::Display for TopologyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingLink { from, end } => write!(f, "{from}: {end:?} links to an empty tile"),
            Self::OneWayLink { from, to }    => write!(f, "{from} -> {to} has no back-reference"),
            Self::NotAdjacent { from, to }   => write!(f, "{from} -> {to} are not adjacent"),
            Self::SideMismatch { from, to }  => write!(f, "{from} -> {to} ends do not face"),
            Self::BadSwitch(pos)             => write!(f, "switch at {pos} has invalid ends"),
            Self::BadTrack(pos)              => write!(f, "track at {pos} has invalid ends"),
            Self::BaseStation                => write!(f, "base station singleton is inconsistent"),
            Self::StationRegistry            => write!(f, "station registry is inconsistent"),
            Self::CellCount { expected, actual } => {
                write!(f, "grid stores {actual} cells, dimensions need {expected}")
            }
            Self::Misplaced(pos)             => write!(f, "element in cell {pos} does not belong there"),
        }
    }
}

impl TrackMap {
    /// Every invariant violation in the current layout; empty when sound.
    pub fn check_topology(&self) -> Vec<TopologyIssue> {
        let mut issues = Vec::new();
        let expected = self.grid.width() as usize * self.grid.height() as usize;
        let actual = self.grid.cell_count();
        if actual != expected {
            // Flat ids are meaningless past this point.
            issues.push(TopologyIssue::CellCount { expected, actual });
            return issues;
        }

        let mut bases = Vec::new();
        let mut stations = Vec::new();

        for (id, element) in self.grid.iter() {
            let pos = self.grid.pos(id);
            if element.tile() != pos
                || !element.geometry_matches(self.grid.tile_center(pos), self.grid.tile_size())
            {
                issues.push(TopologyIssue::Misplaced(pos));
            }
            match element.kind() {
                ElementKind::BaseStation => bases.push(id),
                ElementKind::Station(_) => stations.push(id),
                ElementKind::Switch(_) => check_switch(element, &mut issues),
                ElementKind::Track => {
                    let (a, b) = (element.end1(), element.end2());
                    if a.is_none() || b.is_none() || a == b {
                        issues.push(TopologyIssue::BadTrack(element.tile()));
                    }
                }
            }
            for end in End::ALL {
                if let Some(next) = element.link(end) {
                    self.check_link(id, element, end, next, &mut issues);
                }
            }
        }

        if bases.len() > 1 || bases.first().copied() != self.base_station {
            issues.push(TopologyIssue::BaseStation);
        }
        let mut registered = self.stations.clone();
        registered.sort_unstable();
        if registered != stations {
            issues.push(TopologyIssue::StationRegistry);
        }
        issues
    }

    fn check_link(
        &self,
        id:      TileId,
        element: &MapElement,
        end:     End,
        other:   TileId,
        issues:  &mut Vec<TopologyIssue>,
    ) {
        let from = element.tile();
        let Some(neighbor) = self.grid.get(other) else {
            issues.push(TopologyIssue::DanglingLink { from, end });
            return;
        };
        let to = neighbor.tile();

        let back = match end {
            End::Upstream => neighbor.downstream_end_to(id),
            _ => (neighbor.previous() == Some(id)).then_some(End::Upstream),
        };
        let Some(back) = back else {
            issues.push(TopologyIssue::OneWayLink { from, to });
            return;
        };

        let side = element.side(end);
        if side.and_then(|s| from.step(s)) != Some(to) {
            issues.push(TopologyIssue::NotAdjacent { from, to });
        }
        if side.map(Direction::opposite) != neighbor.side(back) {
            issues.push(TopologyIssue::SideMismatch { from, to });
        }
    }
}

fn check_switch(element: &MapElement, issues: &mut Vec<TopologyIssue>) {
    let sides: Vec<Direction> = End::ALL.iter().filter_map(|&e| element.side(e)).collect();
    let distinct = sides
        .iter()
        .enumerate()
        .all(|(i, s)| !sides[i + 1..].contains(s));
    if sides.len() != 3 || !distinct {
        issues.push(TopologyIssue::BadSwitch(element.tile()));
    }
}
