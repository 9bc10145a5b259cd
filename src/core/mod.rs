//! Core library components.
//!
//! The format-agnostic decode pipeline. Nothing here touches the terminal,
//! the environment or the filesystem; callers hand in a reader and get
//! bytes back.

pub mod codec;
pub mod constants;
pub mod detect;
pub mod pipeline;
pub mod reader;
pub mod secret;
pub mod types;

pub use pipeline::{process, process_bytes, process_with, Options};
pub use types::{Format, Tree};
