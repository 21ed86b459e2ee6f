//! Derived statement data
//!
//! Output of the statement builder: each performance enriched with its
//! resolved play and computed charge, plus the aggregated totals. All
//! values here are derived once and never mutated afterwards; the
//! renderers only read from this data.

use crate::types::play::Play;

/// Money amount in minor currency units (cents)
///
/// All pricing arithmetic is integer cents so no floating-point drift can
/// creep into totals. Formatting to `$1,730.00` is a presentation concern
/// handled by the render module.
pub type Cents = i64;

/// Volume credits earned by the customer
pub type Credits = u64;

/// A performance enriched with its resolved play and computed charge
///
/// Built once per performance by the statement builder. The per-performance
/// `amount` and `credits` are the single source of truth for money values;
/// totals are sums of these fields, never recomputed independently.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPerformance {
    /// The resolved catalog entry for this performance
    pub play: Play,

    /// Audience size from the raw performance
    pub audience: u32,

    /// Charge for this performance in cents
    pub amount: Cents,

    /// Volume credits earned by this performance
    pub credits: Credits,
}

/// Complete statement data, ready for rendering
///
/// Performances appear in the same order as the input invoice. The totals
/// are exact sums over the enriched sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementData {
    /// Customer the statement is addressed to
    pub customer: String,

    /// Enriched performances in input order
    pub performances: Vec<EnrichedPerformance>,

    /// Sum of per-performance amounts, in cents
    pub total_amount: Cents,

    /// Sum of per-performance credits
    pub total_credits: Credits,
}
