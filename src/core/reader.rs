//! Input draining.

use std::io::Read;

use tracing::debug;

use crate::error::{Error, Result};

/// Read `source` to exhaustion.
///
/// # Errors
///
/// Returns `Error::Read` if the source fails before reaching end of input.
pub fn read<R: Read>(mut source: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf).map_err(Error::Read)?;
    debug!(bytes = buf.len(), "input read");
    Ok(buf)
}
