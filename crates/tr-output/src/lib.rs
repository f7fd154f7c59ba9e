//! `tr-output`: game output writers and snapshot persistence.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`csv`]      | `CsvWriter`: `arrivals.csv`, `score.csv`                 |
//! | [`observer`] | `OutputObserver`, a `tr_sim::WorldObserver`              |
//! | [`snapshot`] | `save_snapshot` / `load_snapshot` (JSON)                 |
//! | [`row`]      | `ArrivalRow`, `ScoreRow`                                 |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tr_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer, 60);
//! world.run_frames(3_600, &mut obs)?;
//! obs.finish()?;
//! tr_output::save_snapshot(Path::new("./output/world.json"), &world.snapshot())?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod snapshot;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{ArrivalRow, ScoreRow};
pub use snapshot::{load_snapshot, save_snapshot};
pub use writer::OutputWriter;
