fn main() {
    env_logger::init();

    let result = mmstat::get_config().and_then(|config| {
        let results = mmstat::report::aggregate(&config);
        mmstat::report::write_report(&results, &config.report)
    });

    if let Err(e) = result {
        eprintln!("verify: {e}");
        std::process::exit(1);
    }
}
