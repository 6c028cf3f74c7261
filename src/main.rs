fn main() {
    env_logger::init();

    let result = mmstat::get_config().and_then(|config| mmstat::run(&config));

    if let Err(e) = result {
        eprintln!("mmstat: {e}");
        std::process::exit(1);
    }
}
