//! Neighbor search and auto-wiring.
//!
//! Wiring always links a *free* slot on each side, so a link can never
//! overwrite an existing one.  After each link both elements re-run their
//! free-end defaults: the new link may land on a side that an unlinked end
//! was defaulted to.

use log::debug;

use tr_core::{Direction, TileId, TilePos};

use crate::{End, ElementKind, MapElement, TrackMap};

/// Which way a neighbor search looks along the train flow.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Flow {
    /// A neighbor that could feed into the searching element.
    Upstream,
    /// A neighbor the searching element could feed into.
    Downstream,
}

/// Priority of `e` as an upstream feeder; lower wins, `None` rejects.
fn upstream_rank(e: &MapElement) -> Option<u8> {
    match e.kind() {
        ElementKind::BaseStation if e.next().is_none() => Some(0),
        ElementKind::Track | ElementKind::Switch(_) if e.next().is_none() => Some(1),
        ElementKind::Switch(_) if e.next_inactive().is_none() => Some(2),
        _ => None,
    }
}

/// Priority of `e` as a downstream target; lower wins, `None` rejects.
fn downstream_rank(e: &MapElement) -> Option<u8> {
    if e.previous().is_some() {
        return None;
    }
    match e.kind() {
        ElementKind::Track | ElementKind::Switch(_) => Some(0),
        ElementKind::Station(_) => Some(1),
        ElementKind::BaseStation => None,
    }
}

impl TrackMap {
    /// First eligible neighbor of `pos` for `flow`, skipping `exclude`.
    ///
    /// Candidates are ranked by kind (see the module docs of `tr-map`); ties
    /// go to the first side in `Left, Right, Up, Down` order.  Returns the side
    /// of `pos` the neighbor lies on, and its id.
    pub fn find_unconnected_neighbor(
        &self,
        pos:     TilePos,
        flow:    Flow,
        exclude: &[TileId],
    ) -> Option<(Direction, TileId)> {
        let rank = match flow {
            Flow::Upstream   => upstream_rank,
            Flow::Downstream => downstream_rank,
        };
        self.grid
            .adjacent(pos)
            .filter(|(_, id)| !exclude.contains(id))
            .filter_map(|(side, id)| {
                let r = rank(self.grid.get(id)?)?;
                Some((r, side, id))
            })
            .min_by_key(|&(r, _, _)| r)
            .map(|(_, side, id)| (side, id))
    }

    /// Link the element at `id` to a free upstream neighbor, if one exists.
    ///
    /// The neighbor's primary downstream slot is used when free, otherwise a
    /// switch's inactive slot.  The element's own downstream neighbors are
    /// never considered, which rules out two-element cycles.
    pub fn connect_upstream(&mut self, id: TileId, exclude: &[TileId]) -> Option<TileId> {
        let element = self.grid.get(id)?;
        if !element.kind().has_upstream() || element.previous().is_some() {
            return None;
        }
        let pos = element.tile();
        let mut exclude = exclude.to_vec();
        exclude.extend(element.next());
        exclude.extend(element.next_inactive());

        let (side, neighbor_id) = self.find_unconnected_neighbor(pos, Flow::Upstream, &exclude)?;
        let neighbor = self.grid.get_mut(neighbor_id)?;
        let slot = neighbor.free_downstream_end()?;
        neighbor.attach(slot, side.opposite(), id);
        if let Some(element) = self.grid.get_mut(id) {
            element.attach(End::Upstream, side, neighbor_id);
        }
        debug!("linked {} -> {} ({:?} via {side})", self.grid.pos(neighbor_id), pos, slot);

        self.assign_free_end_defaults(neighbor_id);
        self.assign_free_end_defaults(id);
        Some(neighbor_id)
    }

    /// Link `slot` of the element at `id` to a free downstream neighbor.
    ///
    /// `slot` is [`End::Downstream`] or, for switches,
    /// [`End::DownstreamInactive`].  The element's own upstream neighbor is
    /// never considered.
    pub fn connect_downstream(
        &mut self,
        id:      TileId,
        slot:    End,
        exclude: &[TileId],
    ) -> Option<TileId> {
        let element = self.grid.get(id)?;
        if slot == End::Upstream || element.branch(slot)?.link.is_some() {
            return None;
        }
        let pos = element.tile();
        let mut exclude = exclude.to_vec();
        exclude.extend(element.previous());

        let (side, neighbor_id) = self.find_unconnected_neighbor(pos, Flow::Downstream, &exclude)?;
        self.grid
            .get_mut(neighbor_id)?
            .attach(End::Upstream, side.opposite(), id);
        if let Some(element) = self.grid.get_mut(id) {
            element.attach(slot, side, neighbor_id);
        }
        debug!("linked {} -> {} ({slot:?} via {side})", pos, self.grid.pos(neighbor_id));

        self.assign_free_end_defaults(neighbor_id);
        self.assign_free_end_defaults(id);
        Some(neighbor_id)
    }

    /// Resolve every unlinked end of the element at `id` to a default side.
    pub fn assign_free_end_defaults(&mut self, id: TileId) {
        if let Some(element) = self.grid.get_mut(id) {
            element.assign_free_end_defaults();
        }
    }

    /// Cut the link from `id` to its downstream neighbor through `slot`,
    /// clearing the neighbor's back-reference too.
    pub(crate) fn unlink_downstream(&mut self, id: TileId, slot: End) {
        let Some(next) = self.grid.get(id).and_then(|e| e.link(slot)) else {
            return;
        };
        if let Some(element) = self.grid.get_mut(id) {
            element.detach(slot);
        }
        if let Some(neighbor) = self.grid.get_mut(next) {
            if neighbor.previous() == Some(id) {
                neighbor.detach(End::Upstream);
            }
        }
        debug!("unlinked {} -> {}", self.grid.pos(id), self.grid.pos(next));
        self.assign_free_end_defaults(next);
        self.assign_free_end_defaults(id);
    }

    /// Cut the link from `id` to its upstream neighbor, clearing whichever of
    /// the neighbor's downstream slots points back.
    pub(crate) fn unlink_upstream(&mut self, id: TileId) {
        let Some(previous) = self.grid.get(id).and_then(MapElement::previous) else {
            return;
        };
        match self.grid.get(previous).and_then(|p| p.downstream_end_to(id)) {
            Some(slot) => self.unlink_downstream(previous, slot),
            None => {
                if let Some(element) = self.grid.get_mut(id) {
                    element.detach(End::Upstream);
                }
                self.assign_free_end_defaults(id);
            }
        }
    }
}
