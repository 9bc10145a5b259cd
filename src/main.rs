//! ksd - decode the data of Kubernetes Secret manifests.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ksd::cli::output;
use ksd::cli::{execute, Cli};
use ksd::core::constants::LOG_ENV;
use ksd::error::{Error, ParseError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ksd=debug")
        } else {
            EnvFilter::new("ksd=warn")
        }
    });

    // stdout carries the decoded document
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        if let Error::Parse(parse) = &e {
            if let Some(offset) = parse.offset() {
                tracing::debug!(offset, "parse failed");
            }
        }

        let suggestion = match &e {
            Error::NoInput => Some("kubectl get secret NAME -o yaml | ksd"),
            Error::IllegalBase64Data { .. } => {
                Some("values under data must be base64; plain text belongs in stringData")
            }
            Error::Parse(ParseError::Json { .. } | ParseError::Yaml(_)) => {
                Some("input must be a single JSON or YAML document")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
