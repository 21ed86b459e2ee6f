//! Core business logic
//!
//! - `pricing` - Genre-specific charge and credit strategies
//! - `builder` - Invoice enrichment and total aggregation

pub mod builder;
pub mod pricing;

pub use builder::{StatementBuilder, UnknownPlayPolicy};
pub use pricing::{strategy_for, ComedyPricing, PricingStrategy, TragedyPricing};
