//! Invoice input types
//!
//! Raw invoice data as supplied by the calling layer: a customer name and
//! an ordered list of performances. These types carry no derived values;
//! enrichment happens in the statement builder.

use serde::Deserialize;

/// A single performance from the raw invoice
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Performance {
    /// Catalog key for the play that was performed
    #[serde(rename = "playID")]
    pub play_id: String,

    /// Audience size; non-negative by construction
    pub audience: u32,
}

/// A customer invoice: the raw input to statement computation
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    /// Customer the statement is addressed to
    pub customer: String,

    /// Performances in billing order; statement rows preserve this order
    pub performances: Vec<Performance>,
}
