use clap::error::ErrorKind;
use clap::Parser;
use std::process;
use subnet_calculator::cli::{usage_message, Args};
use subnet_calculator::config::{self, Settings};
use subnet_calculator::error::SubnetError;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let usage = SubnetError::usage(usage_message());
                if let Some(reason) = err.to_string().lines().next() {
                    eprintln!("{reason}");
                }
                eprintln!("{usage}");
                process::exit(usage.exit_code());
            }
        },
    };

    let dotenv_file = config::load_dotenv();
    if let Err(e) = config::init_logging(args.verbose, config::log_config_path().as_deref()) {
        eprintln!("Error initializing logging: {e}");
    }
    if let Some(path) = dotenv_file {
        log::debug!("Loaded environment from {}", path.display());
    }

    let settings = Settings::from_env(&args);
    log::debug!("Settings: {settings:?}");

    match subnet_calculator::run(&args, &settings) {
        Ok(outcome) => {
            println!("{}", outcome.stdout);
            process::exit(outcome.exit_code);
        }
        Err(err) => {
            log::error!("{err}");
            process::exit(err.exit_code());
        }
    }
}
