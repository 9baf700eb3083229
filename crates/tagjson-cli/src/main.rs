//! `tagjson` CLI — convert type-tagged JSON files into plain JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Convert ./input.json and print pretty JSON to stdout
//! tagjson
//!
//! # Convert a specific file into another file
//! tagjson data.json -o plain.json
//!
//! # Read stdin, emit compact JSON, fail on malformed payloads
//! cat data.json | tagjson - --compact --strict
//!
//! # Show which fields were dropped
//! RUST_LOG=tagjson_core=trace tagjson data.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use tagjson_core::TransformOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tagjson",
    version,
    about = "Convert DynamoDB-style type-tagged JSON into plain JSON"
)]
struct Cli {
    /// Input file, or `-` to read from stdin
    #[arg(default_value = "input.json")]
    input: String,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long)]
    compact: bool,

    /// Fail when a scalar tag carries a non-string payload instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = read_input(&cli.input)?;
    let document: serde_json::Value = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse JSON: {}", cli.input))?;

    let options = TransformOptions { strict: cli.strict };
    let plain = tagjson_core::transform_document_with(&document, &options)
        .context("Failed to transform tagged JSON")?;
    tracing::info!(input = %cli.input, fields = plain.len(), "converted document");

    let rendered = if cli.compact {
        serde_json::to_string(&plain)?
    } else {
        serde_json::to_string_pretty(&plain)?
    };
    write_output(cli.output.as_deref(), &rendered)?;

    Ok(())
}

/// Log to stderr so stdout carries only JSON.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    tracing::debug!(path, "reading input file");
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
