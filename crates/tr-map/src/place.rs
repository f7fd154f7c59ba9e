//! Placement, erasure and switch toggling.
//!
//! Each placement follows the same pattern: check the tile, store the new
//! element, scan for neighbors to link (upstream first, then downstream),
//! then resolve whatever ends remain unlinked.

use log::{debug, info};

use tr_core::{Color, GameRng, TileId, TilePos};

use crate::{End, ElementKind, MapElement, MapError, MapResult, TrackMap};

impl TrackMap {
    /// Place a track segment on the empty tile at `pos`, linking it to free
    /// neighbors on both sides.
    pub fn add_track(&mut self, pos: TilePos) -> MapResult<TileId> {
        let id = self.vacant(pos)?;
        let element = self.grid.make_element(ElementKind::Track, pos);
        self.grid.insert(id, element);

        let upstream = self.connect_upstream(id, &[]);
        let exclude: Vec<TileId> = upstream.into_iter().collect();
        self.connect_downstream(id, End::Downstream, &exclude);
        self.assign_free_end_defaults(id);

        info!("placed track at {pos}");
        Ok(id)
    }

    /// Place a switch at `pos`.
    ///
    /// The tile must be empty or hold a track segment.  A replaced segment
    /// hands its links to the switch unchanged; ends it did not link are
    /// searched for as on an empty tile.  The inactive branch always scans
    /// for a free downstream neighbor other than the ones already linked.
    pub fn add_switch(&mut self, pos: TilePos) -> MapResult<TileId> {
        let id = self.tile_id(pos)?;
        let replaced = match self.grid.get(id) {
            None => None,
            Some(e) if e.is_track() => Some(e.clone()),
            Some(_) => return Err(MapError::Occupied(pos)),
        };

        let mut switch = self.grid.make_element(ElementKind::Switch(Default::default()), pos);
        let mut linked: Vec<TileId> = Vec::new();
        if let Some(track) = &replaced {
            for end in [End::Upstream, End::Downstream] {
                if let (Some(side), Some(neighbor)) = (track.side(end), track.link(end)) {
                    switch.attach(end, side, neighbor);
                    linked.push(neighbor);
                }
            }
            debug!("switch at {pos} absorbs track links {linked:?}");
        }
        self.grid.insert(id, switch);

        if self.grid.get(id).is_some_and(|e| e.previous().is_none()) {
            if let Some(up) = self.connect_upstream(id, &linked) {
                linked.push(up);
            }
        }
        if self.grid.get(id).is_some_and(|e| e.next().is_none()) {
            if let Some(down) = self.connect_downstream(id, End::Downstream, &linked) {
                linked.push(down);
            }
        }
        self.connect_downstream(id, End::DownstreamInactive, &linked);
        self.assign_free_end_defaults(id);

        info!("placed switch at {pos}");
        Ok(id)
    }

    /// Place a station with a random unused color.
    ///
    /// # Errors
    /// [`MapError::StationColorsExhausted`] once all colors are taken.
    pub fn add_station(&mut self, pos: TilePos, rng: &mut GameRng) -> MapResult<TileId> {
        self.vacant(pos)?;
        let free = self.free_station_colors();
        let color = *rng.choose(&free).ok_or(MapError::StationColorsExhausted)?;
        self.add_station_with_color(pos, color)
    }

    /// Place a station of `color`, linking it to a free upstream neighbor.
    pub fn add_station_with_color(&mut self, pos: TilePos, color: Color) -> MapResult<TileId> {
        let id = self.vacant(pos)?;
        if self.station_colors().contains(&color) {
            return Err(if self.station_colors_exhausted() {
                MapError::StationColorsExhausted
            } else {
                MapError::ColorInUse(color)
            });
        }
        let element = self.grid.make_element(ElementKind::Station(color), pos);
        self.grid.insert(id, element);

        self.connect_upstream(id, &[]);
        self.assign_free_end_defaults(id);
        self.stations.push(id);

        info!("placed {color} station at {pos}");
        Ok(id)
    }

    /// Place the base station at `pos`, removing any previous one.
    pub fn add_base_station(&mut self, pos: TilePos) -> MapResult<TileId> {
        let id = self.vacant(pos)?;
        if let Some(old) = self.base_station {
            let old_pos = self.grid.pos(old);
            self.erase(old_pos)?;
        }
        let element = self.grid.make_element(ElementKind::BaseStation, pos);
        self.grid.insert(id, element);

        self.connect_downstream(id, End::Downstream, &[]);
        self.assign_free_end_defaults(id);
        self.base_station = Some(id);

        info!("placed base station at {pos}");
        Ok(id)
    }

    /// Remove the element at `pos`, unlinking its neighbors on every side.
    ///
    /// An in-progress drag is abandoned if it touches the erased tile.
    pub fn erase(&mut self, pos: TilePos) -> MapResult<MapElement> {
        let id = self.tile_id(pos)?;
        if self.grid.get(id).is_none() {
            return Err(MapError::Empty(pos));
        }

        self.stations.retain(|&s| s != id);
        if self.base_station == Some(id) {
            self.base_station = None;
        }
        if self.drag.as_ref().is_some_and(|d| d.contains(id)) {
            debug!("drag abandoned: {pos} erased");
            self.drag = None;
        }

        self.unlink_downstream(id, End::Downstream);
        self.unlink_downstream(id, End::DownstreamInactive);
        self.unlink_upstream(id);

        let element = self.grid.remove(id).ok_or(MapError::Empty(pos))?;
        info!("erased {} at {pos}", element.kind().as_str());
        Ok(element)
    }

    /// Swap the active and inactive branches of the switch at `pos`.
    pub fn toggle_switch(&mut self, pos: TilePos) -> MapResult<()> {
        let id = self.tile_id(pos)?;
        let element = self.grid.get_mut(id).ok_or(MapError::NotASwitch(pos))?;
        if !element.toggle() {
            return Err(MapError::NotASwitch(pos));
        }
        debug!("switch at {pos} now leaves via {:?}", element.end2());
        Ok(())
    }
}
