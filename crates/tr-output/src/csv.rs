//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `arrivals.csv`
//! - `score.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ArrivalRow, OutputResult, ScoreRow};

/// Writes game output to two CSV files.
pub struct CsvWriter {
    arrivals: Writer<File>,
    scores:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut arrivals = Writer::from_path(dir.join("arrivals.csv"))?;
        arrivals.write_record(["frame", "train", "train_color", "outcome", "station_color", "delta"])?;

        let mut scores = Writer::from_path(dir.join("score.csv"))?;
        scores.write_record(["frame", "correct", "wrong"])?;

        Ok(Self {
            arrivals,
            scores,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_arrival(&mut self, row: &ArrivalRow) -> OutputResult<()> {
        self.arrivals.write_record(&[
            row.frame.to_string(),
            row.train.to_string(),
            row.train_color.as_str().to_owned(),
            row.outcome.to_owned(),
            row.station_color.map(|c| c.as_str()).unwrap_or_default().to_owned(),
            row.delta.to_string(),
        ])?;
        Ok(())
    }

    fn write_score(&mut self, row: &ScoreRow) -> OutputResult<()> {
        self.scores.write_record(&[
            row.frame.to_string(),
            row.correct.to_string(),
            row.wrong.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.arrivals.flush()?;
        self.scores.flush()?;
        Ok(())
    }
}
