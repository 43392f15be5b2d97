//! IPv4 subnet calculator.
//!
//! [`compute`] derives the mask, wildcard, network/broadcast addresses and
//! usable host range from a dotted-decimal address and a CIDR prefix. It is
//! pure; [`run`] wires it to parsed arguments and renders the output.
//!
//! ```
//! let subnet = subnet_calculator::compute("10.0.0.5", 8).unwrap();
//! assert_eq!(subnet.network_address.to_string(), "10.0.0.0");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

use cli::{Args, OutputFormat};
use config::Settings;
use error::SubnetError;

pub use models::{compute, SubnetDescriptor};

/// What the binary should print on stdout and the status it should exit with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub exit_code: i32,
}

/// Run one calculation for the parsed arguments.
///
/// Validation failures are part of the normal output: the message is
/// printed and the exit code is 0 unless `settings.strict` is set. Only
/// rendering failures come back as `Err`.
pub fn run(args: &Args, settings: &Settings) -> Result<Outcome, SubnetError> {
    log::info!("#Start run() for {}/{}", args.network, args.cidr);

    match compute(&args.network, args.cidr) {
        Ok(subnet) => {
            log::debug!("Got subnet {} ({} usable)", subnet.cidr, subnet.usable_hosts);
            let stdout = match settings.format {
                OutputFormat::Text => output::render_report(&subnet, settings.color),
                OutputFormat::Json => output::render_json(&subnet)?,
            };
            Ok(Outcome {
                stdout,
                exit_code: 0,
            })
        }
        Err(err) if err.is_validation() => {
            log::debug!("Rejected input: {err:?}");
            let stdout = match settings.format {
                OutputFormat::Text => output::render_error(&err.to_string(), settings.color),
                OutputFormat::Json => output::render_json_error(&err)?,
            };
            let exit_code = if settings.strict { err.exit_code() } else { 0 };
            Ok(Outcome { stdout, exit_code })
        }
        Err(err) => Err(err),
    }
}
