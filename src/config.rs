//! Runtime settings and logging set-up.
//!
//! Settings come from the environment (optionally seeded from a `.env` file)
//! and are overridden by command-line flags.

use crate::cli::{Args, OutputFormat};
use clap::ValueEnum;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const ENV_STRICT: &str = "SUBNET_CALC_STRICT";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Load `.env` from the working directory (or a parent) if there is one.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Log config file named by [`ENV_LOG_CONFIG`], if set.
pub fn log_config_path() -> Option<PathBuf> {
    std::env::var_os(ENV_LOG_CONFIG).map(PathBuf::from)
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub strict: bool,
    pub color: bool,
}

impl Settings {
    /// Resolve against the process environment.
    pub fn from_env(args: &Args) -> Settings {
        Settings::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve settings from `args` and an environment lookup.
    pub fn resolve<F>(args: &Args, env: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_format = match env(ENV_FORMAT) {
            Some(value) => match OutputFormat::from_str(value.trim(), true) {
                Ok(format) => Some(format),
                Err(_) => {
                    log::warn!("Ignoring unknown {ENV_FORMAT}={value}");
                    None
                }
            },
            None => None,
        };

        let format = args.format.or(env_format).unwrap_or_default();
        let strict = args.strict || env(ENV_STRICT).is_some_and(|v| is_truthy(&v));

        Settings {
            format,
            strict,
            color: !args.no_color && format == OutputFormat::Text,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Initialise log4rs.
///
/// A YAML file named by [`ENV_LOG_CONFIG`] wins when it exists; otherwise
/// everything goes to stderr at `warn`, or `debug` when verbose. Nothing is
/// ever logged to stdout.
pub fn init_logging(verbose: bool, log_config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    if let Some(path) = log_config.filter(|p| p.exists()) {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error loading log config {}: {e}", path.display()))?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    if let Some(path) = log_config {
        eprintln!("Log config {} not found, logging to stderr", path.display());
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log4rs::init_config(stderr_config(level)?)?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
