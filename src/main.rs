use consola::{
    cli::{get_args, get_log_level_from_verbose},
    config::ConsoleConfig,
    demo,
    error::default_error_handler,
    prompt::{Session, StdTerminal},
};

fn main() {
    let args = get_args();
    let lvl = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    let result = Session::new(StdTerminal::new(), ConsoleConfig::default())
        .and_then(|session| demo::run(&session));

    if let Err(err) = result {
        default_error_handler(err);
    }
}
