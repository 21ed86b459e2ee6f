//! HTML statement renderer

use crate::render::money::format_money;
use crate::types::StatementData;
use std::fmt::Write;

/// Render statement data as an HTML fragment
///
/// Same rows as the plain-text statement, wrapped in a table. Play and
/// customer names come from the trusted static catalog and invoice data,
/// so no HTML escaping is applied; that changes if either ever becomes
/// externally supplied.
pub fn render_html(data: &StatementData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<h1>Statement for {}</h1>", data.customer);
    let _ = writeln!(out, "<table>");
    let _ = writeln!(out, "<tr><th>play</th><th>seats</th><th>cost</th></tr>");
    for performance in &data.performances {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            performance.play.name,
            performance.audience,
            format_money(performance.amount)
        );
    }
    let _ = writeln!(out, "</table>");
    let _ = writeln!(
        out,
        "<p>Amount owed is <em>{}</em></p>",
        format_money(data.total_amount)
    );
    let _ = writeln!(
        out,
        "<p>You earned <em>{}</em> credits</p>",
        data.total_credits
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnrichedPerformance, Genre, Play};

    #[test]
    fn test_render_html_table() {
        let data = StatementData {
            customer: "BigCo".to_string(),
            performances: vec![EnrichedPerformance {
                play: Play {
                    name: "Hamlet".to_string(),
                    genre: Genre::Tragedy,
                },
                audience: 55,
                amount: 65_000,
                credits: 25,
            }],
            total_amount: 65_000,
            total_credits: 25,
        };

        let expected = concat!(
            "<h1>Statement for BigCo</h1>\n",
            "<table>\n",
            "<tr><th>play</th><th>seats</th><th>cost</th></tr>\n",
            "<tr><td>Hamlet</td><td>55</td><td>$650.00</td></tr>\n",
            "</table>\n",
            "<p>Amount owed is <em>$650.00</em></p>\n",
            "<p>You earned <em>25</em> credits</p>\n",
        );
        assert_eq!(render_html(&data), expected);
    }

    #[test]
    fn test_render_html_empty_statement_has_no_rows() {
        let data = StatementData {
            customer: "SmallCo".to_string(),
            performances: vec![],
            total_amount: 0,
            total_credits: 0,
        };

        let html = render_html(&data);
        assert!(html.contains("<table>\n<tr><th>play</th>"));
        assert!(!html.contains("<td>"));
        assert!(html.contains("<em>$0.00</em>"));
    }
}
