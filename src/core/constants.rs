//! Constants used throughout ksd.
//!
//! Centralizes field names and formatting choices.

/// Field holding the base64-encoded secret values.
pub const DATA_FIELD: &str = "data";

/// Indent used for JSON output.
pub const JSON_INDENT: &[u8] = b"    ";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "KSD_LOG";
