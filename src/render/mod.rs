//! Statement rendering
//!
//! Two pure functions over the same immutable [`StatementData`], selected
//! by [`Format`]:
//!
//! - `plain` - indented plain-text statement
//! - `html` - the same rows as an HTML table
//!
//! Money formatting lives in `money` and is shared by both renderers; it
//! never feeds back into the integer pricing arithmetic.

pub mod html;
pub mod money;
pub mod plain;

pub use html::render_html;
pub use money::format_money;
pub use plain::render_plain_text;

use crate::types::StatementData;

/// Output format for a rendered statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Indented plain text, one line per performance
    #[default]
    PlainText,
    /// HTML fragment with the performances in a table
    Html,
}

/// Render statement data in the requested format
pub fn render(data: &StatementData, format: Format) -> String {
    match format {
        Format::PlainText => render_plain_text(data),
        Format::Html => render_html(data),
    }
}
