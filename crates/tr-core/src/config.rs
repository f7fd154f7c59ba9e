//! Game configuration.
//!
//! Typically built with `GameConfig::default()` and tweaked, or loaded from a
//! JSON file by the application crate and passed to the world builder.

use crate::{CoreError, CoreResult, Point, TilePos};

/// What happens to trains that reached a terminal status.
///
/// Terminal statuses never change again regardless of the policy; the policy
/// only decides whether the train stays in the world's train list (and is
/// therefore still handed to renderers).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetentionPolicy {
    /// Every train stays in the list forever.
    KeepAll,
    /// Trains that entered a station are removed once scored; stranded
    /// trains stay where they stopped.
    #[default]
    DropArrived,
    /// Every terminal train is removed once reported.
    DropTerminal,
}

/// Top-level game configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Grid width in tiles.  Default: 10.
    pub map_width: u32,

    /// Grid height in tiles.  Default: 10.
    pub map_height: u32,

    /// Edge length of a tile in pixels.  Default: 50.
    pub tile_size: u32,

    /// Pixels a train moves per frame.  Default: 1.0.
    pub train_step: f64,

    /// Spawning pauses while this many trains are active.  Default: 8.
    pub max_active_trains: usize,

    /// Lower bound of the random spawn countdown, in frames.  Default: 180
    /// (3 s at 60 FPS).
    pub spawn_min_frames: u32,

    /// Upper bound (inclusive) of the random spawn countdown, in frames.
    /// Default: 600 (10 s at 60 FPS).
    pub spawn_max_frames: u32,

    /// Master RNG seed.  The same seed and inputs always replay identically.
    pub seed: u64,

    /// Fate of terminal trains.
    pub retention: RetentionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width:         10,
            map_height:        10,
            tile_size:         50,
            train_step:        1.0,
            max_active_trains: 8,
            spawn_min_frames:  180,
            spawn_max_frames:  600,
            seed:              42,
            retention:         RetentionPolicy::DropArrived,
        }
    }
}

impl GameConfig {
    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.map_width == 0 || self.map_height == 0 {
            return Err(CoreError::Config(format!(
                "map must be at least 1x1 tiles, got {}x{}",
                self.map_width, self.map_height
            )));
        }
        if self.tile_size < 2 {
            return Err(CoreError::Config(format!(
                "tile_size must be at least 2 pixels, got {}",
                self.tile_size
            )));
        }
        if !(self.train_step.is_finite() && self.train_step > 0.0) {
            return Err(CoreError::Config(format!(
                "train_step must be a positive number, got {}",
                self.train_step
            )));
        }
        if self.max_active_trains == 0 {
            return Err(CoreError::Config("max_active_trains must be at least 1".into()));
        }
        if self.spawn_min_frames > self.spawn_max_frames {
            return Err(CoreError::Config(format!(
                "spawn range is inverted: {}..={}",
                self.spawn_min_frames, self.spawn_max_frames
            )));
        }
        Ok(())
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.map_width as usize * self.map_height as usize
    }

    /// `true` if `pos` lies on the grid.
    #[inline]
    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x < self.map_width && pos.y < self.map_height
    }

    /// Pixel center of the tile at `pos`.
    pub fn tile_center(&self, pos: TilePos) -> Point {
        let size = self.tile_size as f64;
        let half = (self.tile_size / 2) as f64;
        Point::new(pos.x as f64 * size + half, pos.y as f64 * size + half)
    }

    /// Tile under the pointer position `(x, y)` in pixels.
    ///
    /// Pixel `n * tile_size` belongs to the tile on its left/top, so a click
    /// exactly on a grid line selects the tile it closes.
    pub fn tile_at_pixel(&self, x: i32, y: i32) -> CoreResult<TilePos> {
        let size = self.tile_size as i32;
        if x < 1 || y < 1 {
            return Err(CoreError::OutOfBounds { x, y });
        }
        let pos = TilePos::new(((x - 1) / size) as u32, ((y - 1) / size) as u32);
        if !self.contains(pos) {
            return Err(CoreError::OutOfBounds { x, y });
        }
        Ok(pos)
    }
}
