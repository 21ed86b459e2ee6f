//! Theatre Statement Engine CLI
//!
//! Command-line interface for producing billing statements from JSON
//! invoice and play-catalog files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- invoice.json
//! cargo run -- --plays plays.json invoice.json
//! cargo run -- --format html invoice.json > statement.html
//! cargo run -- --skip-unknown-plays invoice.json
//! ```
//!
//! The program loads the invoice and play catalog, computes the enriched
//! statement data, renders it in the requested format, and writes the
//! statement to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing file, malformed JSON, unknown play, unsupported genre)

use std::process;
use theatre_statement_engine::cli;
use theatre_statement_engine::core::StatementBuilder;
use theatre_statement_engine::io;
use theatre_statement_engine::render;
use theatre_statement_engine::types::StatementError;

fn run(args: &cli::CliArgs) -> Result<String, StatementError> {
    let invoice = io::load_invoice(&args.invoice_file)?;
    let catalog = io::load_catalog(&args.plays_file)?;

    let builder = StatementBuilder::with_policy(args.unknown_play_policy());
    let data = builder.build(&invoice, &catalog)?;

    Ok(render::render(&data, args.format.into()))
}

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Statement to stdout, diagnostics to stderr
    match run(&args) {
        Ok(statement) => print!("{}", statement),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
