//! Map elements: track segments, switches, stations and the base station.
//!
//! Every element shares one payload: a tile, up to three connection ends and
//! the neighbor each end links to.  `end1` ([`End::Upstream`]) faces the base
//! station, `end2` ([`End::Downstream`]) faces the stations.  A switch adds a
//! second downstream branch ([`End::DownstreamInactive`]) that trains ignore
//! until the switch is toggled.
//!
//! Links are [`TileId`]s, never owning references: the [`Grid`][crate::Grid]
//! owns every element.  Whenever an end's direction changes, the element's
//! pixel geometry (end points and movement versor) is recomputed in the same
//! call, so readers never observe stale geometry.

use tr_core::{Color, Direction, Point, TileId, TilePos, Vector};

// ── End / Branch ──────────────────────────────────────────────────────────────

/// One of the (up to) three connection ends of an element.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum End {
    /// `end1`, linked to `previous_segment`.
    Upstream,
    /// `end2`, linked to `next_segment`.  Trains leave through this end.
    Downstream,
    /// `end2_inactive`, the bypassed branch of a switch.
    DownstreamInactive,
}

impl End {
    /// Fixed resolution order for default assignment.
    pub const ALL: [End; 3] = [End::Upstream, End::Downstream, End::DownstreamInactive];
}

/// A connection end: the side of the tile it uses and the neighbor behind it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Branch {
    pub side: Option<Direction>,
    pub link: Option<TileId>,
}

// ── ElementKind ───────────────────────────────────────────────────────────────

/// The closed set of placeable element kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// A plain two-ended passage.
    Track,
    /// A track with a second, inactive downstream branch.
    Switch(Branch),
    /// A destination; trains of the same color score here.
    Station(Color),
    /// The single spawn point.
    BaseStation,
}

impl ElementKind {
    /// `true` for every kind that can be fed by an upstream neighbor.
    #[inline]
    pub fn has_upstream(&self) -> bool {
        !matches!(self, ElementKind::BaseStation)
    }

    /// `true` for every kind that can feed a downstream neighbor.
    #[inline]
    pub fn has_downstream(&self) -> bool {
        !matches!(self, ElementKind::Station(_))
    }

    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Track       => "track",
            ElementKind::Switch(_)   => "switch",
            ElementKind::Station(_)  => "station",
            ElementKind::BaseStation => "base station",
        }
    }
}

// ── MapElement ────────────────────────────────────────────────────────────────

/// A placed element with its linkage and derived geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapElement {
    tile:       TilePos,
    center:     Point,
    /// Half the tile edge, in pixels (integer-halved like the tile center).
    half:       f64,
    kind:       ElementKind,
    upstream:   Branch,
    downstream: Branch,
    versor:     Vector,
}

impl MapElement {
    /// A fresh, unlinked element centered at `center`.
    pub fn new(kind: ElementKind, tile: TilePos, center: Point, tile_size: u32) -> Self {
        let mut element = Self {
            tile,
            center,
            half: (tile_size / 2) as f64,
            kind,
            upstream: Branch::default(),
            downstream: Branch::default(),
            versor: Vector::ZERO,
        };
        element.recompute();
        element
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn tile(&self) -> TilePos {
        self.tile
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    #[inline]
    pub fn is_track(&self) -> bool {
        matches!(self.kind, ElementKind::Track)
    }

    #[inline]
    pub fn is_switch(&self) -> bool {
        matches!(self.kind, ElementKind::Switch(_))
    }

    #[inline]
    pub fn is_base_station(&self) -> bool {
        matches!(self.kind, ElementKind::BaseStation)
    }

    /// The station color, for stations only.
    #[inline]
    pub fn station_color(&self) -> Option<Color> {
        match self.kind {
            ElementKind::Station(color) => Some(color),
            _ => None,
        }
    }

    /// The branch behind `end`, or `None` if this kind has no such end.
    pub fn branch(&self, end: End) -> Option<&Branch> {
        match end {
            End::Upstream if self.kind.has_upstream() => Some(&self.upstream),
            End::Downstream if self.kind.has_downstream() => Some(&self.downstream),
            End::DownstreamInactive => match &self.kind {
                ElementKind::Switch(branch) => Some(branch),
                _ => None,
            },
            _ => None,
        }
    }

    fn branch_mut(&mut self, end: End) -> Option<&mut Branch> {
        match end {
            End::Upstream if self.kind.has_upstream() => Some(&mut self.upstream),
            End::Downstream if self.kind.has_downstream() => Some(&mut self.downstream),
            End::DownstreamInactive => match &mut self.kind {
                ElementKind::Switch(branch) => Some(branch),
                _ => None,
            },
            _ => None,
        }
    }

    /// Side used by `end`, if resolved.
    #[inline]
    pub fn side(&self, end: End) -> Option<Direction> {
        self.branch(end).and_then(|b| b.side)
    }

    /// Neighbor linked through `end`, if any.
    #[inline]
    pub fn link(&self, end: End) -> Option<TileId> {
        self.branch(end).and_then(|b| b.link)
    }

    #[inline]
    pub fn end1(&self) -> Option<Direction> {
        self.side(End::Upstream)
    }

    #[inline]
    pub fn end2(&self) -> Option<Direction> {
        self.side(End::Downstream)
    }

    #[inline]
    pub fn end2_inactive(&self) -> Option<Direction> {
        self.side(End::DownstreamInactive)
    }

    #[inline]
    pub fn previous(&self) -> Option<TileId> {
        self.link(End::Upstream)
    }

    #[inline]
    pub fn next(&self) -> Option<TileId> {
        self.link(End::Downstream)
    }

    #[inline]
    pub fn next_inactive(&self) -> Option<TileId> {
        self.link(End::DownstreamInactive)
    }

    /// The end (primary or inactive) whose link is `target`.
    pub fn downstream_end_to(&self, target: TileId) -> Option<End> {
        [End::Downstream, End::DownstreamInactive]
            .into_iter()
            .find(|&end| self.link(end) == Some(target))
    }

    /// The first downstream end with no neighbor yet: primary before inactive.
    pub fn free_downstream_end(&self) -> Option<End> {
        [End::Downstream, End::DownstreamInactive]
            .into_iter()
            .find(|&end| self.branch(end).is_some_and(|b| b.link.is_none()))
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Pixel position of the connection point on `side`.
    pub fn side_point(&self, side: Direction) -> Point {
        let (dx, dy) = side.offset();
        Point::new(
            self.center.x + dx as f64 * self.half,
            self.center.y + dy as f64 * self.half,
        )
    }

    /// Pixel position of `end`'s connection point, if that end is resolved.
    #[inline]
    pub fn end_point(&self, end: End) -> Option<Point> {
        self.side(end).map(|side| self.side_point(side))
    }

    /// Unit movement vector from `end1` (or the center when `end1` is unset)
    /// toward `end2`.  Zero when `end2` is unset or coincides with the start.
    #[inline]
    pub fn versor(&self) -> Vector {
        self.versor
    }

    /// Whether the stored center, half-edge and versor are the ones this
    /// element would derive on a tile centered at `center`.
    pub(crate) fn geometry_matches(&self, center: Point, tile_size: u32) -> bool {
        let mut derived = self.clone();
        derived.center = center;
        derived.half = (tile_size / 2) as f64;
        derived.recompute();
        derived == *self
    }

    fn recompute(&mut self) {
        let from = self.end_point(End::Upstream).unwrap_or(self.center);
        self.versor = match self.end_point(End::Downstream) {
            Some(to) => Vector::between(from, to).normalized(),
            None => Vector::ZERO,
        };
    }

    // ── Mutation (engine only) ────────────────────────────────────────────

    /// Set the side of `end` and recompute geometry.  No-op for ends this
    /// kind does not have.
    pub(crate) fn set_end(&mut self, end: End, side: Option<Direction>) {
        if let Some(branch) = self.branch_mut(end) {
            branch.side = side;
            self.recompute();
        }
    }

    /// Link `end` to `neighbor` through `side`.
    pub(crate) fn attach(&mut self, end: End, side: Direction, neighbor: TileId) {
        if let Some(branch) = self.branch_mut(end) {
            branch.side = Some(side);
            branch.link = Some(neighbor);
            self.recompute();
        }
    }

    /// Drop the neighbor behind `end`; its side stays until defaults run.
    pub(crate) fn detach(&mut self, end: End) {
        if let Some(branch) = self.branch_mut(end) {
            branch.link = None;
        }
    }

    /// Swap the active and inactive downstream branches of a switch,
    /// direction and neighbor together.  Returns `false` for other kinds.
    pub fn toggle(&mut self) -> bool {
        let ElementKind::Switch(inactive) = &mut self.kind else {
            return false;
        };
        std::mem::swap(inactive, &mut self.downstream);
        self.recompute();
        true
    }

    /// Give every unlinked end a default side.
    ///
    /// Switches drop all unlinked sides and then fill them, in [`End::ALL`]
    /// order, with the first [`Direction::ALL`] side not used by another end,
    /// so the three ends are always pairwise distinct.  Other kinds straighten
    /// out: an unlinked end takes the opposite of the other end.  A track with
    /// neither end known lies horizontally, left to right.
    pub(crate) fn assign_free_end_defaults(&mut self) {
        if self.is_switch() {
            for end in End::ALL {
                if self.link(end).is_none() {
                    if let Some(branch) = self.branch_mut(end) {
                        branch.side = None;
                    }
                }
            }
            for end in End::ALL {
                if self.side(end).is_some() {
                    continue;
                }
                let used: Vec<Direction> = End::ALL.iter().filter_map(|&e| self.side(e)).collect();
                let free = Direction::ALL
                    .into_iter()
                    .find(|d| !used.contains(d))
                    .unwrap_or(Direction::Left);
                if let Some(branch) = self.branch_mut(end) {
                    branch.side = Some(free);
                }
            }
        } else {
            if self.kind.has_upstream() && self.upstream.link.is_none() {
                self.upstream.side = self.end2().map(Direction::opposite);
            }
            if self.kind.has_downstream() && self.downstream.link.is_none() {
                self.downstream.side = self.end1().map(Direction::opposite);
            }
            if self.is_track() && self.upstream.side.is_none() && self.downstream.side.is_none() {
                self.upstream.side = Some(Direction::Left);
                self.downstream.side = Some(Direction::Right);
            }
        }
        self.recompute();
    }
}
