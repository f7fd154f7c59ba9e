//! Randomized train spawning.

use tr_core::{Color, GameConfig, GameRng};

/// Frame countdown until the next spawn.
///
/// The countdown starts at zero, so the first frame of a running game spawns
/// immediately.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Spawner {
    countdown: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume with a given countdown (snapshot restore).
    pub fn with_countdown(countdown: u32) -> Self {
        Self { countdown }
    }

    #[inline]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// One frame of the spawn clock.
    ///
    /// Returns the color of the train to spawn when the countdown has elapsed,
    /// fewer than `config.max_active_trains` trains are active and at least
    /// one station color exists.  The countdown then restarts at a uniform
    /// random value in `spawn_min_frames..=spawn_max_frames`; on every other
    /// frame it ticks down by one.
    pub fn tick(
        &mut self,
        active: usize,
        colors: &[Color],
        rng:    &mut GameRng,
        config: &GameConfig,
    ) -> Option<Color> {
        if self.countdown == 0 && active < config.max_active_trains {
            if let Some(&color) = rng.choose(colors) {
                self.countdown = rng.gen_range(config.spawn_min_frames..=config.spawn_max_frames);
                return Some(color);
            }
        }
        self.countdown = self.countdown.saturating_sub(1);
        None
    }
}
