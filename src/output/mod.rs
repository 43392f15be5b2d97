//! Output formatting for subnet results.
//!
//! - [`terminal`] - the labelled text report, optionally coloured
//! - [`json`] - JSON rendering for scripts

mod json;
mod terminal;

pub use json::{render_json, render_json_error};
pub use terminal::{format_field, render_error, render_report};
