//! Clearlane CLI - product payload tooling.
//!
//! # Usage
//!
//! ```bash
//! # Convert an editable form document to the API payload
//! cl-cli product convert -i form.json --pretty
//!
//! # Restore a fetched payload to the editable form shape
//! cl-cli product restore -i payload.json
//!
//! # Validate a form document against the submission schema
//! cl-cli product check -i form.json
//! ```
//!
//! # Commands
//!
//! - `product convert` - Form JSON to create/update request body
//! - `product restore` - Response body back to form JSON
//! - `product check` - Submission schema validation, exit 1 on failure
//!
//! Log verbosity follows `RUST_LOG`; a `.env` file is loaded when present.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cl-cli")]
#[command(author, version, about = "Clearlane CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Product form/payload tooling
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Convert an editable form document to the API payload
    Convert {
        /// Path to the form JSON document
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Restore an API payload to the editable form shape
    Restore {
        /// Path to the payload JSON document
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Validate a form document against the submission schema
    Check {
        /// Path to the form JSON document
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Product { action } => match action {
            ProductAction::Convert { input, pretty } => commands::product::convert(&input, pretty),
            ProductAction::Restore { input, pretty } => commands::product::restore(&input, pretty),
            ProductAction::Check { input } => commands::product::check(&input),
        },
    }
}
