//! Play and catalog types for the theatre statement engine
//!
//! This module defines the play reference data: the [`Genre`] enum, the
//! [`Play`] structure, and the read-only [`PlayCatalog`] lookup. Genre
//! validation happens once, when the catalog is built from raw entries, so
//! every `Play` handed to the pricing calculator already carries a
//! recognized genre.

use crate::types::error::StatementError;
use serde::Deserialize;
use std::collections::HashMap;

/// Play genres recognized by the pricing calculator
///
/// This is a closed set: each variant has a pricing strategy, and catalog
/// entries with any other genre string are rejected with
/// [`StatementError::UnsupportedGenre`] when the catalog is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    /// Flat base charge with a per-seat surcharge above 30 attendees
    Tragedy,
    /// Base charge plus a stepped large-audience bonus and a per-seat levy
    Comedy,
}

impl Genre {
    /// Parse a raw genre string from catalog data
    ///
    /// Returns `None` for anything outside the recognized set; the caller
    /// attaches the play ID context and raises `UnsupportedGenre`.
    pub fn parse(genre: &str) -> Option<Genre> {
        match genre {
            "tragedy" => Some(Genre::Tragedy),
            "comedy" => Some(Genre::Comedy),
            _ => None,
        }
    }

    /// The lowercase genre name as it appears in catalog data
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

/// A play from the catalog
///
/// Immutable reference data. The genre is already validated, so pricing
/// dispatch over it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Human-readable play name, shown on statement rows
    pub name: String,
    /// Validated genre driving the pricing formulas
    pub genre: Genre,
}

/// Raw catalog entry as it appears in the plays JSON file
///
/// The genre arrives as a free-form string (`"type"` in the wire format)
/// and is validated when the entry is folded into a [`PlayCatalog`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawPlay {
    /// Human-readable play name
    pub name: String,
    /// Unvalidated genre string
    #[serde(rename = "type")]
    pub genre: String,
}

/// Read-only play catalog
///
/// Maps play IDs to validated [`Play`] entries. Built once at startup and
/// never mutated afterwards, so it can be shared freely across statement
/// requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayCatalog {
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Build a catalog from raw entries, validating every genre
    ///
    /// # Arguments
    ///
    /// * `raw` - Play ID to raw entry mapping, as deserialized from JSON
    ///
    /// # Returns
    ///
    /// * `Ok(PlayCatalog)` if every entry carries a recognized genre
    /// * `Err(StatementError::UnsupportedGenre)` for the first invalid entry
    pub fn from_raw(raw: HashMap<String, RawPlay>) -> Result<Self, StatementError> {
        let mut plays = HashMap::with_capacity(raw.len());
        for (play_id, entry) in raw {
            let genre = Genre::parse(&entry.genre)
                .ok_or_else(|| StatementError::unsupported_genre(&entry.genre, &play_id))?;
            plays.insert(
                play_id,
                Play {
                    name: entry.name,
                    genre,
                },
            );
        }
        Ok(PlayCatalog { plays })
    }

    /// Resolve a play ID to its catalog entry
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownPlay` when the ID is absent.
    pub fn lookup(&self, play_id: &str) -> Result<&Play, StatementError> {
        self.plays
            .get(play_id)
            .ok_or_else(|| StatementError::unknown_play(play_id))
    }

    /// Number of plays in the catalog
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn raw(name: &str, genre: &str) -> RawPlay {
        RawPlay {
            name: name.to_string(),
            genre: genre.to_string(),
        }
    }

    #[rstest]
    #[case::tragedy("tragedy", Some(Genre::Tragedy))]
    #[case::comedy("comedy", Some(Genre::Comedy))]
    #[case::unknown("pastoral", None)]
    #[case::empty("", None)]
    #[case::case_sensitive("Tragedy", None)]
    fn test_genre_parse(#[case] input: &str, #[case] expected: Option<Genre>) {
        assert_eq!(Genre::parse(input), expected);
    }

    #[rstest]
    #[case::tragedy(Genre::Tragedy, "tragedy")]
    #[case::comedy(Genre::Comedy, "comedy")]
    fn test_genre_round_trip(#[case] genre: Genre, #[case] name: &str) {
        assert_eq!(genre.as_str(), name);
        assert_eq!(Genre::parse(genre.as_str()), Some(genre));
    }

    #[test]
    fn test_catalog_from_valid_entries() {
        let mut entries = HashMap::new();
        entries.insert("hamlet".to_string(), raw("Hamlet", "tragedy"));
        entries.insert("as-like".to_string(), raw("As You Like It", "comedy"));

        let catalog = PlayCatalog::from_raw(entries).unwrap();
        assert_eq!(catalog.len(), 2);

        let hamlet = catalog.lookup("hamlet").unwrap();
        assert_eq!(hamlet.name, "Hamlet");
        assert_eq!(hamlet.genre, Genre::Tragedy);
    }

    #[test]
    fn test_catalog_rejects_unsupported_genre() {
        let mut entries = HashMap::new();
        entries.insert("as-like".to_string(), raw("As You Like It", "pastoral"));

        let result = PlayCatalog::from_raw(entries);
        assert_eq!(
            result,
            Err(StatementError::unsupported_genre("pastoral", "as-like"))
        );
    }

    #[test]
    fn test_lookup_unknown_play() {
        let catalog = PlayCatalog::from_raw(HashMap::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.lookup("macbeth"),
            Err(StatementError::unknown_play("macbeth"))
        );
    }

    #[test]
    fn test_raw_play_deserializes_wire_format() {
        let entry: RawPlay =
            serde_json::from_str(r#"{ "name": "Othello", "type": "tragedy" }"#).unwrap();
        assert_eq!(entry, raw("Othello", "tragedy"));
    }
}
