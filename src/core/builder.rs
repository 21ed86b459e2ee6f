//! Statement data builder
//!
//! This module provides the StatementBuilder that turns a raw invoice into
//! rendering-ready [`StatementData`]: each performance is resolved against
//! the play catalog, priced through the genre strategies, and appended in
//! input order, then the totals are summed once over the finished sequence.
//!
//! # Error Policy
//!
//! The default policy is strict: the first performance that references an
//! unknown play aborts the whole statement. A partial statement would
//! silently under-bill the customer, so lenient skipping of unresolvable
//! performances is opt-in via [`UnknownPlayPolicy::Skip`].

use crate::core::pricing::strategy_for;
use crate::types::{
    Cents, Credits, EnrichedPerformance, Invoice, PlayCatalog, StatementData, StatementError,
};

/// How the builder treats performances whose play ID is not in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownPlayPolicy {
    /// Abort the statement with `UnknownPlay` (the default)
    #[default]
    Fail,

    /// Drop the performance and keep going
    ///
    /// The dropped performance contributes nothing to the totals. Intended
    /// for exploratory runs against incomplete catalogs, never for billing.
    Skip,
}

/// Builds statement data from an invoice and a play catalog
///
/// Stateless apart from the configured unknown-play policy; one builder
/// can serve any number of statement requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder {
    policy: UnknownPlayPolicy,
}

impl StatementBuilder {
    /// Create a builder with the strict default policy
    pub fn new() -> Self {
        StatementBuilder::default()
    }

    /// Create a builder with an explicit unknown-play policy
    pub fn with_policy(policy: UnknownPlayPolicy) -> Self {
        StatementBuilder { policy }
    }

    /// Build statement data for an invoice
    ///
    /// For each performance, in input order: resolve the play, compute the
    /// charge and credits via the genre strategy, and append the enriched
    /// row. Totals are summed once over the finished sequence; the
    /// per-performance values are the single source of truth.
    ///
    /// # Arguments
    ///
    /// * `invoice` - The raw invoice to bill
    /// * `catalog` - Read-only play catalog to resolve performances against
    ///
    /// # Errors
    ///
    /// * `StatementError::UnknownPlay` if a performance references a play
    ///   ID absent from the catalog and the policy is [`UnknownPlayPolicy::Fail`]
    pub fn build(
        &self,
        invoice: &Invoice,
        catalog: &PlayCatalog,
    ) -> Result<StatementData, StatementError> {
        let mut performances = Vec::with_capacity(invoice.performances.len());

        for performance in &invoice.performances {
            let play = match catalog.lookup(&performance.play_id) {
                Ok(play) => play,
                Err(StatementError::UnknownPlay { .. })
                    if self.policy == UnknownPlayPolicy::Skip =>
                {
                    continue;
                }
                Err(e) => return Err(e),
            };

            let strategy = strategy_for(play.genre);
            performances.push(EnrichedPerformance {
                play: play.clone(),
                audience: performance.audience,
                amount: strategy.amount(performance.audience),
                credits: strategy.credits(performance.audience),
            });
        }

        let total_amount: Cents = performances.iter().map(|p| p.amount).sum();
        let total_credits: Credits = performances.iter().map(|p| p.credits).sum();

        Ok(StatementData {
            customer: invoice.customer.clone(),
            performances,
            total_amount,
            total_credits,
        })
    }
}
