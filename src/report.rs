use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    config::Config,
    error::{Error, Result},
    verify,
};

/// One problem size and whether its stored product checked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationResult {
    pub size: usize,
    pub correct: bool,
}

/// Verifies every configured size, in the configured order.
///
/// A size whose fixtures are missing or malformed does not stop the batch:
/// the failure is logged and the size recorded as incorrect, and the
/// remaining sizes still run.
pub fn aggregate(config: &Config) -> Vec<VerificationResult> {
    config
        .sizes
        .iter()
        .map(|&size| {
            let correct = match verify::verify(config, size) {
                Ok(correct) => correct,
                Err(e) => {
                    log::warn!("size {size}: verification failed: {e}");
                    false
                }
            };
            VerificationResult { size, correct }
        })
        .collect()
}

/// Writes one line per result, replacing any previous report at `path`.
pub fn write_report(results: &[VerificationResult], path: &Path) -> Result<()> {
    write_report_inner(results, path).map_err(|e| Error::io(path, e))
}

fn write_report_inner(results: &[VerificationResult], path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(fs::File::create(path)?);

    for result in results {
        let verdict = if result.correct { "Correct" } else { "Error" };
        writeln!(file, "Size {n}x{n}: {verdict}", n = result.size)?;
    }

    file.flush()
}
