//! ksd - decode the data of Kubernetes Secret manifests.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── decode        # Read a manifest, print it decoded
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Decode pipeline
//!     ├── reader        # Drain an input source
//!     ├── detect        # JSON or YAML
//!     ├── codec         # Parse and serialize the document tree
//!     ├── secret        # Base64-decode `data`
//!     └── pipeline      # Run the stages in order
//! ```
//!
//! # Example
//!
//! ```
//! let input = br#"{"data": {"password": "c2VjcmV0"}}"#;
//! let output = ksd::core::process(&input[..]).unwrap();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "{\n    \"data\": {\n        \"password\": \"secret\"\n    }\n}"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;
