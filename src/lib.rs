pub mod config;
pub mod error;
pub mod matrix;
pub mod plot;
pub mod report;
pub mod timing;
pub mod verify;

use std::path;

pub use error::{Error, Result};

fn get_config_inner() -> Result<config::Config> {
    let mut args = std::env::args();

    if args.len() < 2 {
        return Ok(config::Config::default());
    }

    config::Config::from_file(path::Path::new(
        &args.next_back().expect("Checked len above"),
    ))
}

/// Loads the configuration from the last command-line argument, or the
/// defaults when no argument is given.
pub fn get_config() -> Result<config::Config> {
    let config = get_config_inner()?;
    log::debug!("{:?}", config);
    Ok(config)
}

/// The whole pipeline: verify every configured size and write the report,
/// then chart whatever timing logs are present.
pub fn run(config: &config::Config) -> Result<()> {
    let results = report::aggregate(config);
    report::write_report(&results, &config.report)?;
    log::info!(
        "wrote {} verification results to {}",
        results.len(),
        config.report.display()
    );

    let logs = config.timing_logs()?;
    if logs.is_empty() {
        log::warn!("no timing logs found, skipping the chart");
        return Ok(());
    }

    let series = timing::load_series(&logs)?;
    plot::render(&series, &config.chart)?;
    log::info!("wrote timing chart to {}", config.chart.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{write_matrix, Matrix};
    use std::fs;

    #[test]
    fn run_writes_the_report_and_skips_the_chart_without_logs() {
        let dir = tempfile::tempdir().unwrap();
        let size_dir = dir.path().join("2");
        fs::create_dir_all(&size_dir).unwrap();
        let a = Matrix::from_row_slice(2, 2, &[1, 2, 3, 4]);
        let b = Matrix::from_row_slice(2, 2, &[5, 6, 7, 8]);
        write_matrix(&size_dir.join(verify::OPERAND_1), &a).unwrap();
        write_matrix(&size_dir.join(verify::OPERAND_2), &b).unwrap();
        write_matrix(&size_dir.join(verify::PRODUCT), &(a * b)).unwrap();

        let config = config::Config {
            sizes: vec![2],
            data_dir: dir.path().into(),
            report: dir.path().join("report.txt"),
            logs: Vec::new(),
            logs_dir: dir.path().join("results"),
            chart: dir.path().join("chart.png"),
        };

        run(&config).unwrap();
        assert_eq!(
            fs::read_to_string(&config.report).unwrap(),
            "Size 2x2: Correct\n"
        );
        assert!(!config.chart.exists());
    }
}
