//! `TrackMap`: the grid plus the registries the engine keeps beside it.

use tr_core::{Color, GameConfig, TileId, TilePos};

use crate::drag::DragChain;
use crate::{Grid, MapElement, MapError, MapResult};

/// The editable track layout: the [`Grid`], the base-station singleton, the
/// station registry and any in-progress drag gesture.
///
/// All mutation goes through the connectivity engine methods (see the
/// `connect`, `place` and `drag` modules), which keep every link
/// bidirectionally consistent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackMap {
    pub(crate) grid: Grid,

    /// Tile of the single base station, if placed.
    pub(crate) base_station: Option<TileId>,

    /// Station tiles in placement order.
    pub(crate) stations: Vec<TileId>,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) drag: Option<DragChain>,
}

impl TrackMap {
    /// An empty map of the given dimensions.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        Self {
            grid: Grid::new(width, height, tile_size),
            base_station: None,
            stations: Vec::new(),
            drag: None,
        }
    }

    /// An empty map sized from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.map_width, config.map_height, config.tile_size)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn get(&self, id: TileId) -> Option<&MapElement> {
        self.grid.get(id)
    }

    #[inline]
    pub fn at(&self, pos: TilePos) -> Option<&MapElement> {
        self.grid.at(pos)
    }

    /// Flat id of `pos`, or [`MapError::OutOfBounds`].
    pub fn tile_id(&self, pos: TilePos) -> MapResult<TileId> {
        self.grid.id(pos).ok_or(MapError::OutOfBounds(pos))
    }

    #[inline]
    pub fn base_station(&self) -> Option<TileId> {
        self.base_station
    }

    #[inline]
    pub fn stations(&self) -> &[TileId] {
        &self.stations
    }

    /// Colors of the placed stations, in placement order.
    pub fn station_colors(&self) -> Vec<Color> {
        self.stations
            .iter()
            .filter_map(|&id| self.grid.get(id).and_then(MapElement::station_color))
            .collect()
    }

    /// Palette colors no station uses yet.
    pub fn free_station_colors(&self) -> Vec<Color> {
        let used = self.station_colors();
        Color::ALL.into_iter().filter(|c| !used.contains(c)).collect()
    }

    /// `true` once every palette color has a station.
    pub fn station_colors_exhausted(&self) -> bool {
        self.stations.len() >= Color::ALL.len()
    }

    /// `true` while a drag gesture is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Id of an in-bounds, empty tile, or the reason it cannot take a new
    /// element.
    pub(crate) fn vacant(&self, pos: TilePos) -> MapResult<TileId> {
        let id = self.tile_id(pos)?;
        if self.grid.get(id).is_some() {
            return Err(MapError::Occupied(pos));
        }
        Ok(id)
    }
}
