//! The fixed-size tile grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec<Option<MapElement>>`; the flat
//! index of `(x, y)` is `y * width + x` and is exposed as [`TileId`].  Because
//! each tile holds at most one element, a `TileId` doubles as the handle of
//! the element on it.  Trains are never stored here.

use tr_core::{Direction, GameConfig, Point, TileId, TilePos};

use crate::{ElementKind, MapElement};

/// Fixed `width × height` array of optional map elements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:     u32,
    height:    u32,
    tile_size: u32,
    cells:     Vec<Option<MapElement>>,
}

impl Grid {
    /// An empty grid.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        Self {
            width,
            height,
            tile_size,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// An empty grid sized from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.map_width, config.map_height, config.tile_size)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of stored cells; `width * height` for any sound grid.
    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied tiles.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    // ── Addressing ────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Flat id of `pos`, or `None` off the grid.
    #[inline]
    pub fn id(&self, pos: TilePos) -> Option<TileId> {
        self.contains(pos)
            .then(|| TileId(pos.y * self.width + pos.x))
    }

    /// Grid coordinates of `id`.
    #[inline]
    pub fn pos(&self, id: TileId) -> TilePos {
        TilePos::new(id.0 % self.width, id.0 / self.width)
    }

    /// The up-to-four in-bounds neighbor positions of `pos`, in
    /// [`Direction::ALL`] order, each tagged with the side it lies on.
    pub fn adjacent(&self, pos: TilePos) -> impl Iterator<Item = (Direction, TileId)> + '_ {
        Direction::ALL.into_iter().filter_map(move |side| {
            let neighbor = pos.step(side)?;
            self.id(neighbor).map(|id| (side, id))
        })
    }

    // ── Element access ────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: TileId) -> Option<&MapElement> {
        self.cells.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut MapElement> {
        self.cells.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Element on the tile at `pos`, if any.
    #[inline]
    pub fn at(&self, pos: TilePos) -> Option<&MapElement> {
        self.id(pos).and_then(|id| self.get(id))
    }

    /// Pixel center of the tile at `pos`.
    pub fn tile_center(&self, pos: TilePos) -> Point {
        let size = self.tile_size as f64;
        let half = (self.tile_size / 2) as f64;
        Point::new(pos.x as f64 * size + half, pos.y as f64 * size + half)
    }

    /// Build an unlinked element of `kind` for the tile at `pos`.
    pub fn make_element(&self, kind: ElementKind, pos: TilePos) -> MapElement {
        MapElement::new(kind, pos, self.tile_center(pos), self.tile_size)
    }

    /// Store `element` at `id`, returning whatever was there before.
    ///
    /// An `id` past the stored cells is ignored; restored grids are
    /// rejected by [`TrackMap::check_topology`](crate::TrackMap::check_topology)
    /// before that can happen.
    pub(crate) fn insert(&mut self, id: TileId, element: MapElement) -> Option<MapElement> {
        self.cells.get_mut(id.index()).and_then(|cell| cell.replace(element))
    }

    /// Clear the tile at `id`.
    pub(crate) fn remove(&mut self, id: TileId) -> Option<MapElement> {
        self.cells.get_mut(id.index()).and_then(Option::take)
    }

    /// Row-major traversal of occupied tiles, for renderers.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &MapElement)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_ref().map(|e| (TileId(i as u32), e)))
    }
}
