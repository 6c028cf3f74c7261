use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while checking results or plotting timings.
/// Each variant carries the offending path so diagnostics point at a file,
/// not just a cause.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {}", .path.display(), .msg)]
    Format { path: PathBuf, msg: String },

    #[error("cannot multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix")]
    ShapeMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("{}: {}", .path.display(), .msg)]
    Draw { path: PathBuf, msg: String },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, msg: impl Into<String>) -> Self {
        Error::Format {
            path: path.into(),
            msg: msg.into(),
        }
    }

    pub(crate) fn format_at(path: &Path, line: usize, msg: impl fmt::Display) -> Self {
        Error::Format {
            path: path.into(),
            msg: format!("line {line}: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_name_the_path_and_line() {
        let err = Error::format_at(Path::new("results/results_4.txt"), 3, "bad elapsed time");
        assert_eq!(
            err.to_string(),
            "results/results_4.txt: line 3: bad elapsed time"
        );
    }

    #[test]
    fn shape_mismatch_reports_both_shapes() {
        let err = Error::ShapeMismatch {
            lhs_rows: 2,
            lhs_cols: 3,
            rhs_rows: 2,
            rhs_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply a 2x3 matrix by a 2x2 matrix"
        );
    }
}
