use std::{
    collections::{btree_map::Entry, BTreeMap},
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// One parsed timing-log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    pub size: usize,
    pub workers: Option<u32>,
    pub seconds: f64,
}

/// The (size, seconds) measurements of one log file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingSeries {
    pub points: Vec<(usize, f64)>,
}

/// Series keyed by worker count. `BTreeMap` keeps the labels in ascending
/// order for rendering, with worker-less logs first.
pub type SeriesMap = BTreeMap<Option<u32>, TimingSeries>;

/// Loads every log into a series map. When two files declare the same worker
/// count, the first one loaded wins and the later file is dropped with a
/// warning.
pub fn load_series(paths: &[PathBuf]) -> Result<SeriesMap> {
    let mut series = SeriesMap::new();

    for path in paths {
        let (workers, loaded) = load_file(path)?;
        match series.entry(workers) {
            Entry::Vacant(slot) => {
                slot.insert(loaded);
            }
            Entry::Occupied(_) => log::warn!(
                "{}: another log already covers worker count {:?}, ignoring this file",
                path.display(),
                workers
            ),
        }
    }

    Ok(series)
}

/// Reads one log file. The file's worker-count label comes from its first
/// line; worker fields on later lines are ignored.
fn load_file(path: &Path) -> Result<(Option<u32>, TimingSeries)> {
    let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;

    let mut workers = None;
    let mut points = Vec::new();

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        let record = parse_record(&line).map_err(|msg| Error::format_at(path, i + 1, msg))?;

        if i == 0 {
            workers = record.workers;
        }
        points.push((record.size, record.seconds));
    }

    Ok((workers, TimingSeries { points }))
}

/// Parses a `", "`-separated line of `"<Label>: <value>"` fields: matrix size
/// first (`"<N>x<N>"`), elapsed time last (`"<float> seconds"`), and a worker
/// count in between when present.
fn parse_record(line: &str) -> std::result::Result<TimingRecord, String> {
    let fields: Vec<&str> = line.split(", ").collect();
    if fields.len() < 2 {
        return Err(format!(
            "expected at least two `Label: value` fields, got {line:?}"
        ));
    }

    let size_value = field_value(fields[0])?;
    let size = size_value
        .split('x')
        .next()
        .unwrap_or(size_value)
        .parse::<usize>()
        .map_err(|_| format!("bad matrix size {size_value:?}"))?;

    let workers = if fields.len() > 2 {
        let value = field_value(fields[1])?;
        Some(
            value
                .parse::<u32>()
                .map_err(|_| format!("bad worker count {value:?}"))?,
        )
    } else {
        None
    };

    let time_value = field_value(fields[fields.len() - 1])?;
    let seconds = time_value
        .strip_suffix(" seconds")
        .unwrap_or(time_value)
        .parse::<f64>()
        .map_err(|_| format!("bad elapsed time {time_value:?}"))?;

    Ok(TimingRecord {
        size,
        workers,
        seconds,
    })
}

fn field_value(field: &str) -> std::result::Result<&str, String> {
    field
        .split_once(": ")
        .map(|(_, value)| value)
        .ok_or_else(|| format!("expected `Label: value`, got {field:?}"))
}
