use crate::core::UnknownPlayPolicy;
use crate::render::Format;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Produce a billing statement for a theatre invoice
#[derive(Parser, Debug)]
#[command(name = "theatre-statement")]
#[command(about = "Produce a billing statement for a theatre invoice", long_about = None)]
pub struct CliArgs {
    /// Input JSON file containing the customer invoice
    #[arg(value_name = "INVOICE", help = "Path to the invoice JSON file")]
    pub invoice_file: PathBuf,

    /// Play catalog JSON file
    #[arg(
        long = "plays",
        value_name = "PLAYS",
        default_value = "plays.json",
        help = "Path to the play catalog JSON file"
    )]
    pub plays_file: PathBuf,

    /// Output format for the rendered statement
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for plain text or 'html' for an HTML table"
    )]
    pub format: OutputFormat,

    /// Skip performances whose play ID is missing from the catalog
    ///
    /// The default is to fail on the first unresolvable play so a statement
    /// can never silently under-bill. This flag opts into the lenient mode.
    #[arg(
        long = "skip-unknown-plays",
        help = "Drop performances with unknown play IDs instead of failing"
    )]
    pub skip_unknown_plays: bool,
}

/// Available statement output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::PlainText,
            OutputFormat::Html => Format::Html,
        }
    }
}

impl CliArgs {
    /// The unknown-play policy implied by the CLI flags
    pub fn unknown_play_policy(&self) -> UnknownPlayPolicy {
        if self.skip_unknown_plays {
            UnknownPlayPolicy::Skip
        } else {
            UnknownPlayPolicy::Fail
        }
    }
}
