use clap::Parser;
use spinline::cli::{exit_code, run, Args};
use spinline::logging;

fn main() {
    let args = Args::parse();

    if !args.no_log {
        initialize_logging();
    }

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("spinline: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn initialize_logging() {
    // A missing log file should never stop the command from running
    if let Err(e) = logging::init_logger() {
        eprintln!("spinline: logging disabled: {}", e);
    } else {
        log::info!("spinline starting");
    }
}
