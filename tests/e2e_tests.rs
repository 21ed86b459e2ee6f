//! End-to-end integration tests
//!
//! These tests validate the complete statement pipeline using predefined
//! JSON test fixtures. Each test:
//! 1. Loads invoice.json and plays.json from a fixture directory
//! 2. Builds statement data through the engine
//! 3. Renders the statement
//! 4. Compares the output with a golden file (or asserts the exact error)
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The BigCo happy path in both output formats
//! - The strict unknown-play failure and the opt-in skip mode
//! - Catalog entries with unsupported genres

use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use theatre_statement_engine::core::{StatementBuilder, UnknownPlayPolicy};
use theatre_statement_engine::io::{load_catalog, load_invoice};
use theatre_statement_engine::render::{render, Format};
use theatre_statement_engine::types::{PlayCatalog, StatementError};

fn fixture_path(fixture: &str, file: &str) -> PathBuf {
    Path::new("tests/fixtures").join(fixture).join(file)
}

fn read_golden(fixture: &str, file: &str) -> String {
    let path = fixture_path(fixture, file);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read golden file {}: {}", path.display(), e))
}

fn bigco_catalog() -> PlayCatalog {
    load_catalog(&fixture_path("bigco", "plays.json")).expect("Failed to load bigco catalog")
}

#[rstest]
#[case::plain_text(Format::PlainText, "expected.txt")]
#[case::html(Format::Html, "expected.html")]
fn test_bigco_statement_matches_golden(#[case] format: Format, #[case] golden: &str) {
    let invoice = load_invoice(&fixture_path("bigco", "invoice.json")).unwrap();
    let data = StatementBuilder::new().build(&invoice, &bigco_catalog()).unwrap();

    assert_eq!(render(&data, format), read_golden("bigco", golden));
}

#[test]
fn test_bigco_totals() {
    let invoice = load_invoice(&fixture_path("bigco", "invoice.json")).unwrap();
    let data = StatementBuilder::new().build(&invoice, &bigco_catalog()).unwrap();

    let amounts: Vec<_> = data.performances.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![65_000, 58_000, 50_000]);
    assert_eq!(data.total_amount, 173_000);
    assert_eq!(data.total_credits, 47);
}

#[test]
fn test_convenience_pipeline_matches_golden() {
    let invoice = load_invoice(&fixture_path("bigco", "invoice.json")).unwrap();
    let statement =
        theatre_statement_engine::statement(&invoice, &bigco_catalog(), Format::PlainText)
            .unwrap();

    assert_eq!(statement, read_golden("bigco", "expected.txt"));
}

#[test]
fn test_unknown_play_fails_strict() {
    let invoice = load_invoice(&fixture_path("unknown_play", "invoice.json")).unwrap();

    let result = StatementBuilder::new().build(&invoice, &bigco_catalog());
    assert_eq!(result, Err(StatementError::unknown_play("macbeth")));
}

#[test]
fn test_unknown_play_skip_mode_matches_golden() {
    let invoice = load_invoice(&fixture_path("unknown_play", "invoice.json")).unwrap();

    let data = StatementBuilder::with_policy(UnknownPlayPolicy::Skip)
        .build(&invoice, &bigco_catalog())
        .unwrap();

    assert_eq!(
        render(&data, Format::PlainText),
        read_golden("unknown_play", "expected_skip.txt")
    );
}

#[test]
fn test_unsupported_genre_fails_at_catalog_load() {
    let result = load_catalog(&fixture_path("bad_genre", "plays.json"));
    assert_eq!(
        result,
        Err(StatementError::unsupported_genre("pastoral", "as-like"))
    );
}

#[test]
fn test_missing_invoice_file_is_reported() {
    let result = load_invoice(&fixture_path("bigco", "missing.json"));
    assert!(matches!(result, Err(StatementError::FileNotFound { .. })));
}
