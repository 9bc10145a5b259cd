//! Error types for ksd.
//!
//! Every pipeline stage reports its own failure kind so callers can pick
//! exit codes and messages without parsing strings.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// The input source could not be read to the end.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// The input is not valid for its detected format.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A value under `data` is not valid base64.
    #[error("illegal base64 data at key {key:?}: {source}")]
    IllegalBase64Data {
        key: String,
        #[source]
        source: base64::DecodeError,
    },

    /// The decoded document cannot be written in the target format.
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("no input: stdin is a terminal")]
    NoInput,
}

/// Syntax errors and non-secret shapes found while parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
        /// Byte offset of the failure in the input, when the parser reported one.
        offset: Option<usize>,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// `data` holds something other than a string or null.
    #[error("data value at key {key:?} is a {kind}, expected a base64 string")]
    DataValue { key: String, kind: &'static str },
}

impl ParseError {
    /// Byte offset of the syntax error within the input, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Json { offset, .. } => *offset,
            Self::Yaml(e) => e.location().map(|l| l.index()),
            Self::DataValue { .. } => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum MarshalError {
    #[error("cannot encode as JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("cannot encode as YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
