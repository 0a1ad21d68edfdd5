//! Shared merchandise capability.
//!
//! Book and Movie share no common base type; this trait is the only contract
//! the aggregate operations rely on. Adding a record kind means implementing
//! it here — the operations themselves never change.

use shelfstock_core::{DomainError, DomainResult};

/// Capability exposed by every record kind the store can hold.
pub trait Merchandise {
    /// Price of a single unit.
    fn unit_price(&self) -> f64;

    /// Number of units in stock.
    fn quantity(&self) -> u64;
}

/// Unit-price check backing the validating constructors.
///
/// The plain constructors accept any value as-is, including negative or
/// non-finite prices; only `try_new` routes through here.
pub(crate) fn check_unit_price(unit_price: f64) -> DomainResult<()> {
    if !unit_price.is_finite() {
        return Err(DomainError::validation("unit price must be finite"));
    }
    if unit_price < 0.0 {
        return Err(DomainError::validation("unit price cannot be negative"));
    }
    Ok(())
}
