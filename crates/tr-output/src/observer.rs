//! `OutputObserver<W>` bridges `WorldObserver` to an `OutputWriter`.

use tr_core::Frame;
use tr_sim::{Arrival, Score, Train, TrainStatus, WorldObserver};

use crate::row::{ArrivalRow, ScoreRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WorldObserver`] that journals arrivals, strandings and periodic score
/// rows to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `WorldObserver`
/// methods have no return value.  Call [`finish`][Self::finish] when the run
/// is over to flush and surface the first error.
pub struct OutputObserver<W: OutputWriter> {
    writer:         W,
    /// Write a score row every this many frames; 0 disables score rows.
    score_interval: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W, score_interval: u64) -> Self {
        Self { writer, score_interval, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, returning the first error seen during the run.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None => result,
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WorldObserver for OutputObserver<W> {
    fn on_arrival(&mut self, frame: Frame, arrival: &Arrival) {
        let outcome = if arrival.train_color == arrival.station_color {
            TrainStatus::InHomeStation
        } else {
            TrainStatus::InWrongStation
        };
        let row = ArrivalRow {
            frame:         frame.0,
            train:         arrival.train.0,
            train_color:   arrival.train_color,
            outcome:       outcome.as_str(),
            station_color: Some(arrival.station_color),
            delta:         arrival.delta.value(),
        };
        let result = self.writer.write_arrival(&row);
        self.store_err(result);
    }

    fn on_stranded(&mut self, frame: Frame, train: &Train) {
        let row = ArrivalRow {
            frame:         frame.0,
            train:         train.id().0,
            train_color:   train.color(),
            outcome:       TrainStatus::Stranded.as_str(),
            station_color: None,
            delta:         0,
        };
        let result = self.writer.write_arrival(&row);
        self.store_err(result);
    }

    fn on_frame_end(&mut self, frame: Frame, score: &Score) {
        if self.score_interval == 0 || !frame.0.is_multiple_of(self.score_interval) {
            return;
        }
        let row = ScoreRow { frame: frame.0, correct: score.correct, wrong: score.wrong };
        let result = self.writer.write_score(&row);
        self.store_err(result);
    }
}
