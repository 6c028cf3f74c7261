use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Default, Deserialize)]
struct ConfigOptional {
    sizes: Option<Vec<usize>>,
    data_dir: Option<PathBuf>,
    report: Option<PathBuf>,
    logs: Option<Vec<PathBuf>>,
    logs_dir: Option<PathBuf>,
    chart: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Problem sizes to verify, in this order.
    pub sizes: Vec<usize>,
    /// Parent of the per-size fixture directories.
    pub data_dir: PathBuf,
    /// Verification report output path.
    pub report: PathBuf,
    /// Explicit timing-log paths. When empty, `logs_dir` is scanned instead.
    pub logs: Vec<PathBuf>,
    /// Directory scanned for `results_*.txt` timing logs.
    pub logs_dir: PathBuf,
    /// Timing chart output path.
    pub chart: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_optional(Default::default())
    }
}

impl Config {
    fn from_optional(optional: ConfigOptional) -> Self {
        Config {
            sizes: optional
                .sizes
                .unwrap_or_else(|| vec![100, 200, 300, 400, 500, 1000, 1500, 2000]),
            data_dir: optional.data_dir.unwrap_or_else(|| PathBuf::from(".")),
            report: optional
                .report
                .unwrap_or_else(|| PathBuf::from("comparison_results.txt")),
            logs: optional.logs.unwrap_or_default(),
            logs_dir: optional.logs_dir.unwrap_or_else(|| PathBuf::from("results")),
            chart: optional
                .chart
                .unwrap_or_else(|| PathBuf::from("matrix_multiplication_time.png")),
        }
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let text = fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
        let optional = toml::from_str(&text).map_err(|e| Error::format(file, e.to_string()))?;
        Ok(Self::from_optional(optional))
    }

    /// Directory holding `matrix_1.txt`, `matrix_2.txt` and `result.txt` for
    /// one problem size.
    pub fn size_dir(&self, size: usize) -> PathBuf {
        self.data_dir.join(size.to_string())
    }

    /// Timing logs to plot: the explicitly configured paths, or every
    /// `results_*.txt` directly under `logs_dir` in file-name order. A
    /// missing `logs_dir` means there is nothing to plot, not an error.
    pub fn timing_logs(&self) -> Result<Vec<PathBuf>> {
        if !self.logs.is_empty() {
            return Ok(self.logs.clone());
        }

        let entries = match fs::read_dir(&self.logs_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(&self.logs_dir, e)),
        };

        let mut logs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.logs_dir, e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with("results_") && name.ends_with(".txt") {
                logs.push(entry.path());
            }
        }

        // Directory iteration order is platform-dependent; name order is not.
        logs.sort();
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_runner_layout() {
        let config = Config::default();
        assert_eq!(config.sizes, vec![100, 200, 300, 400, 500, 1000, 1500, 2000]);
        assert_eq!(config.report, PathBuf::from("comparison_results.txt"));
        assert_eq!(config.logs_dir, PathBuf::from("results"));
        assert_eq!(config.chart, PathBuf::from("matrix_multiplication_time.png"));
        assert!(config.logs.is_empty());
    }

    #[test]
    fn from_file_overrides_only_the_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mmstat.toml");
        fs::write(
            &path,
            "sizes = [10, 20]\ndata_dir = \"fixtures\"\nchart = \"out.png\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(config.chart, PathBuf::from("out.png"));
        assert_eq!(config.report, PathBuf::from("comparison_results.txt"));
    }

    #[test]
    fn size_dir_joins_the_stringified_size() {
        let config = Config {
            data_dir: PathBuf::from("fixtures"),
            ..Config::default()
        };
        assert_eq!(config.size_dir(100), PathBuf::from("fixtures/100"));
    }

    #[test]
    fn from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mmstat.toml");
        fs::write(&path, "sizes = \"not a list\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Format { .. }), "{err}");
    }

    #[test]
    fn timing_logs_scans_logs_dir_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "results_2_processes.txt",
            "results_10_processes.txt",
            "notes.txt",
            "results_4_processes.log",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let config = Config {
            logs_dir: dir.path().into(),
            ..Config::default()
        };
        let logs = config.timing_logs().unwrap();
        assert_eq!(
            logs,
            vec![
                dir.path().join("results_10_processes.txt"),
                dir.path().join("results_2_processes.txt"),
            ]
        );
    }

    #[test]
    fn explicit_logs_take_precedence_over_the_scan() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("results_2_processes.txt"), "").unwrap();

        let config = Config {
            logs: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
            logs_dir: dir.path().into(),
            ..Config::default()
        };
        assert_eq!(
            config.timing_logs().unwrap(),
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn a_missing_logs_dir_yields_no_logs() {
        let config = Config {
            logs_dir: PathBuf::from("no/such/dir"),
            ..Config::default()
        };
        assert_eq!(config.timing_logs().unwrap(), Vec::<PathBuf>::new());
    }
}
