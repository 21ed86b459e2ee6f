//! JSON input loading
//!
//! Reads the invoice and play-catalog fixture formats from disk:
//!
//! ```json
//! { "customer": "BigCo", "performances": [{ "playID": "hamlet", "audience": 55 }] }
//! ```
//!
//! ```json
//! { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
//! ```
//!
//! All functions here do I/O and parsing only; genre validation is
//! delegated to [`PlayCatalog::from_raw`] so the core owns the rule.
//!
//! # Error Handling
//!
//! - Missing files surface as `FileNotFound` with the offending path
//! - Other I/O failures surface as `IoError`
//! - Malformed JSON surfaces as `ParseError` with the path and the
//!   serde_json diagnostic (which includes line and column)

use crate::types::{Invoice, PlayCatalog, RawPlay, StatementError};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn read_file(path: &Path) -> Result<String, StatementError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StatementError::file_not_found(&path.display().to_string())
        } else {
            StatementError::from(e)
        }
    })
}

/// Load an invoice from a JSON file
///
/// # Errors
///
/// * `FileNotFound` / `IoError` if the file cannot be read
/// * `ParseError` if the JSON does not match the invoice shape
pub fn load_invoice(path: &Path) -> Result<Invoice, StatementError> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| StatementError::parse_error(&path.display().to_string(), &e.to_string()))
}

/// Load and validate a play catalog from a JSON file
///
/// Parses the raw `playID -> {name, type}` mapping, then builds the
/// validated catalog.
///
/// # Errors
///
/// * `FileNotFound` / `IoError` if the file cannot be read
/// * `ParseError` if the JSON does not match the catalog shape
/// * `UnsupportedGenre` if any entry carries an unrecognized genre
pub fn load_catalog(path: &Path) -> Result<PlayCatalog, StatementError> {
    let contents = read_file(path)?;
    let raw: HashMap<String, RawPlay> = serde_json::from_str(&contents)
        .map_err(|e| StatementError::parse_error(&path.display().to_string(), &e.to_string()))?;
    PlayCatalog::from_raw(raw)
}
