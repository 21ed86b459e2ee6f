//! Plain-text statement renderer

use crate::render::money::format_money;
use crate::types::StatementData;
use std::fmt::Write;

/// Render statement data as plain text
///
/// One indented line per performance (play name, formatted charge, raw
/// seat count), then the amount owed and the credits earned. Ends with a
/// trailing newline so the statement can be written to a terminal as-is.
pub fn render_plain_text(data: &StatementData) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Statement for {}", data.customer);
    for performance in &data.performances {
        let _ = writeln!(
            out,
            "  {}: {} ({} seats)",
            performance.play.name,
            format_money(performance.amount),
            performance.audience
        );
    }
    let _ = writeln!(out, "Amount owed is {}", format_money(data.total_amount));
    let _ = writeln!(out, "You earned {} credits", data.total_credits);
    out
}
