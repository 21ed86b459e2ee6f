//! Error types for the theatre statement engine
//!
//! This module defines all error types that can occur while computing a
//! billing statement. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Data Integrity Errors**: unknown play IDs, unrecognized genres. These
//!   abort the whole statement rather than producing a partial result — a
//!   silently dropped performance would under-bill the customer.
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **Parse Errors**: malformed invoice or play-catalog JSON.

use thiserror::Error;

/// Main error type for the statement engine
///
/// This enum represents all possible errors that can occur while loading
/// input data and computing a statement. Each variant includes relevant
/// context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// A performance references a play ID that is absent from the catalog
    ///
    /// Fatal for the affected statement under the default strict policy.
    /// The lenient skip policy drops the performance instead (opt-in only).
    #[error("Unknown play '{play_id}'")]
    UnknownPlay {
        /// The play ID that could not be resolved
        play_id: String,
    },

    /// A catalog entry carries a genre outside the recognized set
    ///
    /// This is a hard validation error, never a warning: no pricing formula
    /// exists for the genre, so the statement cannot be computed.
    #[error("Unsupported genre '{genre}' for play '{play_id}'")]
    UnsupportedGenre {
        /// The unrecognized genre string from the catalog entry
        genre: String,
        /// The play ID whose catalog entry is invalid
        play_id: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// JSON parsing error in an invoice or play-catalog file
    #[error("JSON parse error in {path}: {message}")]
    ParseError {
        /// The file that failed to parse
        path: String,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to StatementError
impl From<std::io::Error> for StatementError {
    fn from(error: std::io::Error) -> Self {
        StatementError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl StatementError {
    /// Create an UnknownPlay error
    pub fn unknown_play(play_id: &str) -> Self {
        StatementError::UnknownPlay {
            play_id: play_id.to_string(),
        }
    }

    /// Create an UnsupportedGenre error
    pub fn unsupported_genre(genre: &str, play_id: &str) -> Self {
        StatementError::UnsupportedGenre {
            genre: genre.to_string(),
            play_id: play_id.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        StatementError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(path: &str, message: &str) -> Self {
        StatementError::ParseError {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}
