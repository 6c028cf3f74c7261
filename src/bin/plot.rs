fn main() {
    env_logger::init();

    let result = mmstat::get_config().and_then(|config| {
        let logs = config.timing_logs()?;
        let series = mmstat::timing::load_series(&logs)?;
        mmstat::plot::render(&series, &config.chart)
    });

    if let Err(e) = result {
        eprintln!("plot: {e}");
        std::process::exit(1);
    }
}
