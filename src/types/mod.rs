//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `play`: Play, genre, and catalog types
//! - `invoice`: Raw invoice input types
//! - `statement`: Derived statement data
//! - `error`: Error types for the statement engine

pub mod error;
pub mod invoice;
pub mod play;
pub mod statement;

pub use error::StatementError;
pub use invoice::{Invoice, Performance};
pub use play::{Genre, Play, PlayCatalog, RawPlay};
pub use statement::{Cents, Credits, EnrichedPerformance, StatementData};
