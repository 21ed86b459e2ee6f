//! I/O module
//!
//! Handles JSON input loading for the CLI. The core never touches the
//! filesystem; everything here converts files into the validated values
//! the core consumes.
//!
//! # Components
//!
//! - `json_reader` - Invoice and play-catalog JSON loading

pub mod json_reader;

pub use json_reader::{load_catalog, load_invoice};
