//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ArrivalRow, OutputResult, ScoreRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one arrival or stranding.
    fn write_arrival(&mut self, row: &ArrivalRow) -> OutputResult<()>;

    /// Write one score summary row.
    fn write_score(&mut self, row: &ScoreRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
