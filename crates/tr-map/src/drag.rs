//! Drag-chain track laying.
//!
//! A drag gesture lays one track segment per newly entered empty tile.  The
//! first tile goes through the full neighbor search (or reuses an existing
//! element with a free downstream slot); every later segment is wired purely
//! from the direction of travel, without scanning its other neighbors, so a
//! fast drag cannot cross-link into unrelated track.  When the gesture ends,
//! the last segment gets one downstream neighbor scan.

use log::{debug, info};

use tr_core::{Direction, TileId, TilePos};

use crate::{End, ElementKind, MapError, MapResult, TrackMap};

/// State of an in-progress drag gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragChain {
    /// Chain elements in laying order; the first may predate the gesture.
    tiles: Vec<TileId>,
    /// Position of the last chain element.
    tail: TilePos,
    /// Downstream slot of the first element the chain continues from.
    head_slot: End,
}

impl DragChain {
    #[inline]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains(&id)
    }

    #[inline]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Slot of the tail element that the next segment hangs off.
    fn tail_slot(&self) -> End {
        if self.tiles.len() == 1 { self.head_slot } else { End::Downstream }
    }
}

/// Tiles visited walking from `from` to `to`, x first then y, excluding
/// `from` itself.
fn manhattan_path(from: TilePos, to: TilePos) -> Vec<TilePos> {
    let mut path = Vec::with_capacity(from.manhattan(to) as usize);
    let mut cur = from;
    while cur.x != to.x {
        cur.x = if to.x > cur.x { cur.x + 1 } else { cur.x - 1 };
        path.push(cur);
    }
    while cur.y != to.y {
        cur.y = if to.y > cur.y { cur.y + 1 } else { cur.y - 1 };
        path.push(cur);
    }
    path
}

impl TrackMap {
    /// Start a drag gesture at `pos`.
    ///
    /// On an empty tile this places a track segment exactly like
    /// [`add_track`](Self::add_track).  On an occupied tile the chain
    /// continues from the element there, provided it has a free downstream
    /// slot.  Any previous gesture is discarded.
    pub fn begin_drag(&mut self, pos: TilePos) -> MapResult<TileId> {
        let id = self.tile_id(pos)?;
        let head_slot = match self.grid.get(id) {
            None => {
                self.add_track(pos)?;
                End::Downstream
            }
            Some(e) => e.free_downstream_end().ok_or(MapError::Occupied(pos))?,
        };
        self.drag = Some(DragChain { tiles: vec![id], tail: pos, head_slot });
        debug!("drag started at {pos} ({head_slot:?})");
        Ok(id)
    }

    /// Extend the current gesture to `pos`, laying a segment on each empty
    /// tile along the way.
    ///
    /// Stops at the first occupied tile.  Returns the number of segments laid;
    /// zero when the pointer has not left the tail tile.
    pub fn drag_to(&mut self, pos: TilePos) -> MapResult<usize> {
        let tail = self.drag.as_ref().ok_or(MapError::NoDrag)?.tail;
        if !self.grid.contains(pos) {
            return Err(MapError::OutOfBounds(pos));
        }
        let mut laid = 0;
        for step in manhattan_path(tail, pos) {
            if self.grid.at(step).is_some() {
                break;
            }
            self.extend_chain(step)?;
            laid += 1;
        }
        Ok(laid)
    }

    /// Finish the gesture: link the chain's loose end to a free downstream
    /// neighbor, or straighten it when there is none.
    ///
    /// Returns the neighbor linked, if any.
    pub fn end_drag(&mut self) -> MapResult<Option<TileId>> {
        let chain = self.drag.take().ok_or(MapError::NoDrag)?;
        let Some(&last) = chain.tiles.last() else {
            return Ok(None);
        };
        let slot = chain.tail_slot();
        let free = self
            .grid
            .get(last)
            .and_then(|e| e.branch(slot))
            .is_some_and(|b| b.link.is_none());
        let linked = if free {
            self.connect_downstream(last, slot, &[])
        } else {
            None
        };
        if linked.is_none() {
            self.assign_free_end_defaults(last);
        }
        info!("drag finished: {} element(s) in chain", chain.tiles.len());
        Ok(linked)
    }

    /// Abandon the gesture without the final neighbor scan.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Lay one segment on the empty tile `step`, adjacent to the chain tail.
    fn extend_chain(&mut self, step: TilePos) -> MapResult<()> {
        let chain = self.drag.as_ref().ok_or(MapError::NoDrag)?;
        let (tail, slot) = (chain.tail, chain.tail_slot());
        let prev = *chain.tiles.last().ok_or(MapError::NoDrag)?;
        let (exit, entry) = Direction::between(tail, step)?;
        let id = self.vacant(step)?;
        if self.grid.get(prev).is_none() {
            return Err(MapError::Empty(tail));
        }

        // A click-placed head may already feed some neighbor; the drag wins.
        self.unlink_downstream(prev, slot);

        let mut segment = self.grid.make_element(ElementKind::Track, step);
        segment.attach(End::Upstream, entry, prev);
        self.grid.insert(id, segment);
        if let Some(element) = self.grid.get_mut(prev) {
            element.attach(slot, exit, id);
        }
        self.assign_free_end_defaults(prev);
        self.assign_free_end_defaults(id);
        debug!("drag laid track at {step} ({entry} -> {exit})");

        if let Some(chain) = self.drag.as_mut() {
            chain.tiles.push(id);
            chain.tail = step;
        }
        Ok(())
    }
}
