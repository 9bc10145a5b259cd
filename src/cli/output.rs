//! Terminal output helpers.
//!
//! Decoded documents go to stdout untouched; everything meant for a human
//! goes to stderr so `ksd` can sit in the middle of a pipe.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use std::io::{self, Write};

use console::style;

use crate::error::{Error, Result};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ illegal base64 data at key "password"`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ kubectl get secret NAME -o yaml | ksd`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Write a document to stdout, ending it with a newline.
pub fn raw(doc: &[u8]) -> Result<()> {
    write_doc(&mut io::stdout().lock(), doc)
}

fn write_doc<W: Write>(out: &mut W, doc: &[u8]) -> Result<()> {
    out.write_all(doc).map_err(Error::Write)?;
    if !doc.ends_with(b"\n") {
        out.write_all(b"\n").map_err(Error::Write)?;
    }
    out.flush().map_err(Error::Write)
}
