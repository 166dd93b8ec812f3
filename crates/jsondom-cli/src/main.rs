//! `jsondom` CLI: validate, minify, and query JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Minify (stdin → stdout)
//! echo '{ "name": "Alice", "age": 30 }' | jsondom minify
//!
//! # Minify from file to file
//! jsondom minify -i data.json -o data.min.json
//!
//! # Check a document, reporting the first error position
//! jsondom validate -i data.json
//!
//! # Extract a nested value (numeric segments index arrays)
//! jsondom get users.0.name -i data.json
//!
//! # List the keys of an object
//! jsondom keys users.0 -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsondom_core::options::DEFAULT_MAX_DEPTH;
use jsondom_core::{parse_with, serialize, ParseOptions, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jsondom", version, about = "Validate, minify, and query JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum container nesting accepted by the parser
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject documents whose top-level value is not an object or array
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and re-serialize without whitespace
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that the input is well-formed JSON
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dot-separated path, e.g. `users.0.name`
    Get {
        /// Path to the value; numeric segments index into arrays
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the keys of the object at a path (the root if omitted), one per line
    Keys {
        /// Path to the object
        path: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = ParseOptions::default()
        .with_max_depth(cli.max_depth)
        .with_scalar_root(!cli.strict);

    match cli.command {
        Commands::Minify { input, output } => {
            let doc = read_document(input.as_deref(), &options)?;
            write_output(output.as_deref(), &serialize(&doc))?;
        }
        Commands::Validate { input } => {
            read_document(input.as_deref(), &options)?;
            println!("valid");
        }
        Commands::Get {
            path,
            input,
            output,
        } => {
            let doc = read_document(input.as_deref(), &options)?;
            let value = resolve(&doc, &path)?;
            write_output(output.as_deref(), &serialize(value))?;
        }
        Commands::Keys { path, input } => {
            let doc = read_document(input.as_deref(), &options)?;
            let path = path.unwrap_or_default();
            let target = resolve(&doc, &path)?;
            let obj = target.as_object().with_context(|| {
                format!("Value at '{path}' is not an object (found {})", target.kind())
            })?;
            for key in obj.keys() {
                println!("{key}");
            }
        }
    }

    Ok(())
}

/// Read the input and parse it, naming the source in any error.
fn read_document(path: Option<&str>, options: &ParseOptions) -> Result<Value> {
    let text = read_input(path)?;
    let source = path.unwrap_or("<stdin>");
    let doc = parse_with(&text, options).with_context(|| format!("Invalid JSON in {source}"))?;
    tracing::debug!(source, kind = %doc.kind(), "parsed document");
    Ok(doc)
}

/// Walk a dot-separated path. Numeric segments index arrays; every other
/// segment is an object key. An empty path is the root.
fn resolve<'v>(root: &'v Value, path: &str) -> Result<&'v Value> {
    let mut current = root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let next = match (current, segment.parse::<usize>()) {
            (Value::Array(_), Ok(index)) => current.get(index),
            _ => current.get(segment),
        };
        current = next.with_context(|| format!("Cannot resolve '{segment}' in path '{path}'"))?;
    }
    Ok(current)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
