//! JSON persistence of world snapshots.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tr_sim::WorldSnapshot;

use crate::OutputResult;

/// Write `snapshot` to `path` as pretty-printed JSON, replacing any existing
/// file.
pub fn save_snapshot(path: &Path, snapshot: &WorldSnapshot) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, snapshot)?;
    out.flush()?;
    Ok(())
}

/// Read a snapshot written by [`save_snapshot`].
///
/// The result still has to go through `World::restore`, which validates it.
pub fn load_snapshot(path: &Path) -> OutputResult<WorldSnapshot> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
