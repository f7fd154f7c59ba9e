//! World observer trait for progress reporting and data collection.

use tr_core::Frame;

use crate::{Arrival, Score, Train};

/// Callbacks invoked by [`World::step`][crate::World::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Within one frame the order is always
/// `on_frame_start`, `on_spawn` (at most once), then, once every train has
/// advanced, `on_arrival` for each arrival and `on_stranded` for each newly
/// stranded train (each in train creation order), then `on_frame_end`.
///
/// # Example: score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl WorldObserver for ScorePrinter {
///     fn on_arrival(&mut self, frame: Frame, arrival: &Arrival) {
///         println!("{frame}: train {} scored {}", arrival.train, arrival.delta.value());
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each frame, before spawning.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called once a new train has been placed at the base station.
    fn on_spawn(&mut self, _frame: Frame, _train: &Train) {}

    /// Called when a train enters a station, with the score it earned.
    fn on_arrival(&mut self, _frame: Frame, _arrival: &Arrival) {}

    /// Called the frame a train becomes stranded.
    fn on_stranded(&mut self, _frame: Frame, _train: &Train) {}

    /// Called at the end of each frame with the running score.
    fn on_frame_end(&mut self, _frame: Frame, _score: &Score) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
