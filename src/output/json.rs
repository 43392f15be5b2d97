//! JSON output for scripts.

use crate::error::SubnetError;
use crate::models::SubnetDescriptor;
use serde_json::json;

/// Pretty-print a descriptor as JSON.
pub fn render_json(subnet: &SubnetDescriptor) -> Result<String, SubnetError> {
    serde_json::to_string_pretty(subnet)
        .map_err(|e| SubnetError::render(format!("Error serializing JSON: {e}")))
}

/// `{"error": "<message>"}` for a failed calculation.
pub fn render_json_error(err: &SubnetError) -> Result<String, SubnetError> {
    serde_json::to_string_pretty(&json!({ "error": err.to_string() }))
        .map_err(|e| SubnetError::render(format!("Error serializing JSON: {e}")))
}
