//! Fluent builder for constructing a [`World`].

use tr_core::{Frame, GameConfig, GameRng};
use tr_map::TrackMap;

use crate::{Phase, Score, SimError, SimResult, Spawner, World};

/// Fluent builder for [`World`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                   |
/// |---------------|-------------------------------------------|
/// | `.map(m)`     | Empty map sized from the config           |
/// | `.started()`  | Stay in [`Phase::Setup`]                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(GameConfig::default())
///     .map(layout)
///     .started()
///     .build()?;
/// world.run_frames(600, &mut NoopObserver)?;
/// ```
pub struct WorldBuilder {
    config:  GameConfig,
    map:     Option<TrackMap>,
    started: bool,
}

impl WorldBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self { config, map: None, started: false }
    }

    /// Start from a prepared layout instead of an empty map.
    ///
    /// The layout's dimensions must match the config.
    pub fn map(mut self, map: TrackMap) -> Self {
        self.map = Some(map);
        self
    }

    /// Call [`World::start`] as the last build step.
    pub fn started(mut self) -> Self {
        self.started = true;
        self
    }

    /// Validate inputs and return a ready world.
    pub fn build(self) -> SimResult<World> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let map = match self.map {
            Some(m) => {
                check_dimensions(&self.config, &m).map_err(SimError::Config)?;
                m
            }
            None => TrackMap::from_config(&self.config),
        };

        let mut world = World {
            rng:           GameRng::new(self.config.seed),
            config:        self.config,
            map,
            trains:        Vec::new(),
            next_train_id: 0,
            spawner:       Spawner::new(),
            score:         Score::default(),
            phase:         Phase::Setup,
            frame:         Frame::ZERO,
        };
        if self.started {
            world.start()?;
        }
        Ok(world)
    }
}

/// `Err` with a description when `map` does not fit `config`.
pub(crate) fn check_dimensions(config: &GameConfig, map: &TrackMap) -> Result<(), String> {
    let grid = map.grid();
    if (grid.width(), grid.height(), grid.tile_size())
        != (config.map_width, config.map_height, config.tile_size)
    {
        return Err(format!(
            "map is {}x{} tiles of {} px, config expects {}x{} tiles of {} px",
            grid.width(),
            grid.height(),
            grid.tile_size(),
            config.map_width,
            config.map_height,
            config.tile_size
        ));
    }
    Ok(())
}
