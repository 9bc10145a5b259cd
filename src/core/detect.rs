//! Input format detection.
//!
//! Decides between JSON and YAML by looking at the first significant byte.
//! Only input shaped like a JSON object pays for a trial parse; everything
//! else falls back to YAML and is validated when it is parsed for real.

use serde::de::IgnoredAny;
use tracing::trace;

/// Check whether `input` is a JSON document.
///
/// - `null` (surrounding whitespace ignored) is JSON
/// - input starting with `{` is JSON only if the whole of it parses
/// - anything else, empty input included, is not
pub fn is_json(input: &[u8]) -> bool {
    let trimmed = input.trim_ascii();

    if trimmed == b"null" {
        return true;
    }

    match trimmed.first() {
        Some(b'{') => {
            // from_slice rejects trailing characters, so a match here
            // consumed the entire input
            let ok = serde_json::from_slice::<IgnoredAny>(trimmed).is_ok();
            trace!(ok, len = trimmed.len(), "trial JSON parse");
            ok
        }
        _ => false,
    }
}
