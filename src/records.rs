//! Reading and writing record files.
//!
//! A file holds either one [`TrackRecord`] object or an array of them; output
//! keeps whichever shape the input had.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result, ResultExt};
use crate::model::TrackRecord;

/// Records as read from one input
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSet {
    Single(TrackRecord),
    Many(Vec<TrackRecord>),
}

impl RecordSet {
    /// All records, for in-place enrichment
    pub fn tracks_mut(&mut self) -> &mut [TrackRecord] {
        match self {
            RecordSet::Single(track) => std::slice::from_mut(track),
            RecordSet::Many(tracks) => tracks,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordSet::Single(_) => 1,
            RecordSet::Many(tracks) => tracks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty-printed JSON in the same shape as the input
    pub fn to_json(&self) -> Result<String> {
        let json = match self {
            RecordSet::Single(track) => serde_json::to_string_pretty(track)?,
            RecordSet::Many(tracks) => serde_json::to_string_pretty(tracks)?,
        };
        Ok(json)
    }
}

/// Parse a JSON document holding a record or an array of records
pub fn parse(json: &str) -> Result<RecordSet> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    match value {
        serde_json::Value::Object(_) => Ok(RecordSet::Single(serde_json::from_value(value)?)),
        serde_json::Value::Array(_) => Ok(RecordSet::Many(serde_json::from_value(value)?)),
        _ => Err(Error::invalid_input(
            "expected a track object or an array of track objects",
        )),
    }
}

/// Read records from a file, or from stdin when `path` is `-`
pub fn read(path: &Path) -> Result<RecordSet> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .with_context("reading stdin")?;
        buf
    } else {
        if !path.exists() {
            return Err(Error::not_found(path));
        }
        std::fs::read_to_string(path).with_context(format!("reading {}", path.display()))?
    };

    parse(&contents).with_context(format!("parsing {}", path.display()))
}

/// Write records to a file, or to stdout when `output` is `None`
pub fn write(records: &RecordSet, output: Option<&Path>) -> Result<()> {
    let json = records.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, json + "\n").with_context(format!("writing {}", path.display()))
        }
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
