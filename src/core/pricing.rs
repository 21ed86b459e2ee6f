//! Genre-specific pricing strategies
//!
//! This module implements the pricing rules as a closed set of strategies,
//! one per genre, dispatched through [`strategy_for`]. Adding a genre means
//! adding one strategy and one match arm, not editing a shared conditional.
//!
//! # Pricing Rules
//!
//! - **Tragedy**: base charge 40000 cents; audiences above 30 add
//!   1000 cents per extra seat. Credits: one per seat above 30.
//! - **Comedy**: base charge 30000 cents; audiences above 20 add a flat
//!   10000 cents plus 500 cents per extra seat; every seat adds a further
//!   300 cents. Credits: one per seat above 30, plus one per five seats.
//!
//! All arithmetic is integer cents. Credits use truncating integer
//! division; audiences are non-negative by type, so credits are too.

use crate::types::{Cents, Credits, Genre};

/// Pricing strategy for a single genre
///
/// Each strategy maps an audience size to a charge amount and a volume
/// credit count. Implementations are stateless unit structs; the audience
/// is the only input.
pub trait PricingStrategy {
    /// Charge for a performance with the given audience, in cents
    fn amount(&self, audience: u32) -> Cents;

    /// Volume credits earned by a performance with the given audience
    fn credits(&self, audience: u32) -> Credits;
}

/// Tragedy pricing
///
/// Flat base with a linear surcharge above 30 attendees.
#[derive(Debug, Clone, Copy)]
pub struct TragedyPricing;

impl PricingStrategy for TragedyPricing {
    fn amount(&self, audience: u32) -> Cents {
        let mut amount: Cents = 40_000;
        if audience > 30 {
            amount += 1_000 * Cents::from(audience - 30);
        }
        amount
    }

    fn credits(&self, audience: u32) -> Credits {
        Credits::from(audience.saturating_sub(30))
    }
}

/// Comedy pricing
///
/// Base charge, a stepped bonus above 20 attendees, and a per-seat levy.
/// Comedies also earn a bonus credit per five attendees.
#[derive(Debug, Clone, Copy)]
pub struct ComedyPricing;

impl PricingStrategy for ComedyPricing {
    fn amount(&self, audience: u32) -> Cents {
        let mut amount: Cents = 30_000;
        if audience > 20 {
            amount += 10_000 + 500 * Cents::from(audience - 20);
        }
        amount += 300 * Cents::from(audience);
        amount
    }

    fn credits(&self, audience: u32) -> Credits {
        Credits::from(audience.saturating_sub(30)) + Credits::from(audience / 5)
    }
}

/// Select the pricing strategy for a genre
///
/// Total over the closed [`Genre`] set: unrecognized genre strings are
/// rejected earlier, when the catalog is built, so every genre reaching
/// this point has a strategy.
pub fn strategy_for(genre: Genre) -> &'static dyn PricingStrategy {
    match genre {
        Genre::Tragedy => &TragedyPricing,
        Genre::Comedy => &ComedyPricing,
    }
}
