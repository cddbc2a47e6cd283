use tigr81::{
    cli::{get_cli, get_log_level_from_verbose, run},
    config::Settings,
    error::default_error_handler,
};

fn main() {
    let cli = get_cli();
    let log_level = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    let result = Settings::load().and_then(|settings| run(cli.command, &settings));

    if let Err(err) = result {
        default_error_handler(err);
    }
}
