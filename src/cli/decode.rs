//! Decode command - print a Secret manifest with its data decoded.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;

use tracing::debug;

use crate::cli::{output, OutputFormat};
use crate::core::{process_with, Options};
use crate::error::{Error, Result};

/// Decode `file`, or stdin when it is `None` or `-`, and print the result.
pub fn execute(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let options = Options {
        output: format.format(),
    };

    let decoded = match file.filter(|path| *path != Path::new("-")) {
        Some(path) => {
            debug!(path = %path.display(), "reading file");
            let f = File::open(path).map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
            process_with(f, options)?
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(Error::NoInput);
            }
            debug!("reading stdin");
            process_with(stdin.lock(), options)?
        }
    };

    output::raw(&decoded)
}
