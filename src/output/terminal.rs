//! Terminal output.
//!
//! Renders a [`SubnetDescriptor`] as the labelled multi-line report.

use crate::models::SubnetDescriptor;
use colored::Colorize;
use std::fmt;

/// Format one `Label: value` line, highlighting the label when asked.
pub fn format_field<T: ToString>(label: &str, value: T, colored: bool) -> String {
    let value_str = value.to_string();
    if colored {
        format!("{}: {}", label.cyan(), value_str.bold())
    } else {
        format!("{label}: {value_str}")
    }
}

/// Render the full report, one field per line, no trailing newline.
///
/// Colouring never changes the text itself; the `colored` crate also drops
/// escapes on its own when stdout is not a terminal or `NO_COLOR` is set.
pub fn render_report(subnet: &SubnetDescriptor, colored: bool) -> String {
    let title = format!(
        "Subnet Calculator Results for {}/{}:",
        subnet.input, subnet.prefix
    );
    let title = if colored {
        title.bold().to_string()
    } else {
        title
    };

    let lines = [
        title,
        format_field("Subnet Mask", subnet.mask, colored),
        format_field("Wildcard Mask", subnet.wildcard, colored),
        format_field("Total Hosts", subnet.total_hosts, colored),
        format_field("Usable Hosts", subnet.usable_hosts, colored),
        format_field("Network Address", subnet.network_address, colored),
        format_field("Broadcast Address", subnet.broadcast_address, colored),
        format_field("First Usable IP", subnet.first_usable, colored),
        format_field("Last Usable IP", subnet.last_usable, colored),
    ];
    lines.join("\n")
}

/// Render a validation error for the terminal.
pub fn render_error(message: &str, colored: bool) -> String {
    if colored {
        message.red().to_string()
    } else {
        message.to_string()
    }
}

impl fmt::Display for SubnetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render_report(self, false))
    }
}
