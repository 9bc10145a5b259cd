//! The decode pipeline: read, detect, parse, decode, encode.

use std::io::Read;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::types::Format;
use crate::core::{codec, reader, secret};
use crate::error::Result;

/// Pipeline settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Output format. `None` writes the format the input was in.
    pub output: Option<Format>,
}

/// Decode the secret document read from `input`.
///
/// Output is in the same format as the input.
///
/// # Errors
///
/// Returns the first error raised by any stage, unchanged.
pub fn process<R: Read>(input: R) -> Result<Vec<u8>> {
    process_with(input, Options::default())
}

/// Like [`process`], with explicit [`Options`].
pub fn process_with<R: Read>(input: R, options: Options) -> Result<Vec<u8>> {
    let raw = Zeroizing::new(reader::read(input)?);
    process_bytes(&raw, options)
}

/// Decode a secret document already held in memory.
///
/// # Errors
///
/// Returns `Error::Parse`, `Error::IllegalBase64Data` or `Error::Marshal`.
pub fn process_bytes(raw: &[u8], options: Options) -> Result<Vec<u8>> {
    let format = Format::detect(raw);
    debug!(%format, "input format detected");

    let mut tree = codec::unmarshal(raw, format)?;
    secret::decode(&mut tree)?;

    codec::marshal(&tree, options.output.unwrap_or(format))
}
