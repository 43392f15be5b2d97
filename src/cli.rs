//! Command-line arguments.

use clap::{Parser, ValueEnum};

/// Binary name used in usage text.
pub const BIN_NAME: &str = "subnet-calculator";

/// Output format for a calculation result.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled report, one field per line
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Command-line arguments for subnet-calculator
#[derive(Parser, Debug, Clone)]
#[command(name = BIN_NAME)]
#[command(about = "Calculate IPv4 subnet mask, wildcard, network/broadcast and usable host range")]
#[command(version)]
pub struct Args {
    /// Network address in dotted-decimal form, e.g. 192.168.1.0
    #[arg(value_name = "NETWORK")]
    pub network: String,

    /// CIDR prefix length, 0-32
    #[arg(value_name = "CIDR", allow_negative_numbers = true)]
    pub cidr: i64,

    /// Output format [env: SUBNET_CALC_FORMAT]
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Exit with a nonzero status when the input is invalid [env: SUBNET_CALC_STRICT]
    #[arg(long)]
    pub strict: bool,

    /// Never colour the report
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// The short usage text printed for a wrong invocation.
pub fn usage_message() -> String {
    format!("Usage: {BIN_NAME} <network> <cidr>\nExample: {BIN_NAME} 192.168.1.0 24")
}
