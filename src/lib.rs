//! Theatre Statement Engine Library
//! # Overview
//!
//! This library computes billing statements for a theatre company: given a
//! customer invoice (play performances with audience sizes) and a play
//! catalog, it derives per-performance charges and loyalty volume credits,
//! then renders the result as plain text or HTML.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Invoice, Play, StatementData, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::pricing`] - Genre-specific charge and credit strategies
//!   - [`core::builder`] - Invoice enrichment and total aggregation
//! - [`render`] - Pure plain-text and HTML renderers
//! - [`io`] - JSON input loading for the CLI
//!
//! # Pricing Rules
//!
//! Charges and credits are genre-specific:
//!
//! - **Tragedy**: 40000-cent base, plus 1000 cents per seat above 30.
//!   One credit per seat above 30.
//! - **Comedy**: 30000-cent base, a stepped bonus above 20 seats, and a
//!   300-cent per-seat levy. Credits as for tragedies, plus one per five
//!   seats.
//!
//! All money values are integer cents; formatting to `$1,730.00` happens
//! only at the rendering boundary.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use theatre_statement_engine::render::Format;
//! use theatre_statement_engine::types::{Invoice, Performance, PlayCatalog, RawPlay};
//!
//! let mut raw = HashMap::new();
//! raw.insert(
//!     "hamlet".to_string(),
//!     RawPlay { name: "Hamlet".to_string(), genre: "tragedy".to_string() },
//! );
//! let catalog = PlayCatalog::from_raw(raw).unwrap();
//!
//! let invoice = Invoice {
//!     customer: "BigCo".to_string(),
//!     performances: vec![Performance { play_id: "hamlet".to_string(), audience: 55 }],
//! };
//!
//! let text = theatre_statement_engine::statement(&invoice, &catalog, Format::PlainText).unwrap();
//! assert!(text.contains("Hamlet: $650.00 (55 seats)"));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod render;
pub mod types;

pub use self::core::{StatementBuilder, UnknownPlayPolicy};
pub use render::{render, Format};
pub use types::{
    Cents, Credits, EnrichedPerformance, Genre, Invoice, Performance, Play, PlayCatalog,
    StatementData, StatementError,
};

/// Compute and render a statement in one step
///
/// Convenience pipeline over [`StatementBuilder`] and [`render::render`]
/// with the strict unknown-play policy.
///
/// # Errors
///
/// Returns `StatementError::UnknownPlay` if any performance references a
/// play ID absent from the catalog.
pub fn statement(
    invoice: &Invoice,
    catalog: &PlayCatalog,
    format: Format,
) -> Result<String, StatementError> {
    let data = StatementBuilder::new().build(invoice, catalog)?;
    Ok(render::render(&data, format))
}
