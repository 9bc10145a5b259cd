//! Base64 decoding of Secret `data`.
//!
//! Only the top-level `data` mapping is touched. Every value is decoded
//! before any is written back, so a failure leaves the tree exactly as it
//! was parsed.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_yaml::Mapping;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::DATA_FIELD;
use crate::core::types::Tree;
use crate::error::{Error, ParseError, Result};

/// Standard alphabet, canonical padding, trailing bits tolerated.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Decode every secret value in `tree` in place.
///
/// Returns the number of values decoded. Documents without secret data are
/// left alone.
///
/// # Errors
///
/// - `Error::IllegalBase64Data` if a value is not valid base64
/// - `Error::Parse(ParseError::DataValue)` if a value is not a string
///
/// On error `tree` is unchanged.
pub fn decode(tree: &mut Tree) -> Result<usize> {
    let Some(record) = secret_record(tree) else {
        debug!("no secret data found");
        return Ok(0);
    };

    let decoded = decode_record(record)?;

    let mut count = 0;
    for ((_, slot), value) in record.iter_mut().zip(decoded) {
        if let Some(text) = value {
            *slot = Tree::String(text);
            count += 1;
        }
    }

    debug!(values = count, "secret data decoded");
    Ok(count)
}

/// Decode a single base64 value into text.
///
/// Line breaks inside the value are skipped. Bytes that are not UTF-8 are
/// replaced with U+FFFD.
///
/// The decoded bytes are wiped once copied into the returned `String`.
/// This is best-effort only: the plaintext lives on, unwiped, in that
/// `String` and in whatever it is serialized into.
///
/// # Errors
///
/// Returns `Error::IllegalBase64Data` tagged with `key`.
pub fn decode_value(key: &str, encoded: &str) -> Result<String> {
    let cleaned: Cow<'_, str> = if encoded.contains(['\r', '\n']) {
        Cow::Owned(encoded.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(encoded)
    };

    let bytes = Zeroizing::new(ENGINE.decode(cleaned.as_bytes()).map_err(|source| {
        Error::IllegalBase64Data {
            key: key.to_string(),
            source,
        }
    })?);

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// The top-level `data` mapping, if `tree` has one.
fn secret_record(tree: &mut Tree) -> Option<&mut Mapping> {
    tree.as_mapping_mut()?
        .get_mut(DATA_FIELD)?
        .as_mapping_mut()
}

/// Decode all values of one record without touching it.
///
/// `None` marks a null value, which stays as it is.
fn decode_record(record: &Mapping) -> Result<Vec<Option<String>>> {
    record
        .iter()
        .map(|(key, value)| match value {
            Tree::Null => Ok(None),
            Tree::String(encoded) => decode_value(&describe_key(key), encoded).map(Some),
            other => Err(ParseError::DataValue {
                key: describe_key(key),
                kind: kind_of(other),
            }
            .into()),
        })
        .collect()
}

/// Render a mapping key for error messages.
fn describe_key(key: &Tree) -> String {
    match key {
        Tree::String(s) => s.clone(),
        Tree::Number(n) => n.to_string(),
        Tree::Bool(b) => b.to_string(),
        Tree::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("<{}>", kind_of(other))),
    }
}

fn kind_of(value: &Tree) -> &'static str {
    match value {
        Tree::Null => "null",
        Tree::Bool(_) => "boolean",
        Tree::Number(_) => "number",
        Tree::String(_) => "string",
        Tree::Sequence(_) => "sequence",
        Tree::Mapping(_) => "mapping",
        Tree::Tagged(_) => "tagged value",
    }
}
