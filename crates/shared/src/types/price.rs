//! Price value in integer minor units.
//!
//! Amounts are whole minor units (cents, pence). Never floats.

use serde::{Deserialize, Serialize};

/// A monetary amount tagged with the code of its currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// The amount in the smallest currency unit (e.g., cents).
    pub amount: i64,
    /// ISO 4217 currency code (e.g., "USD"). Matched case-sensitively.
    pub currency: String,
}

impl Price {
    /// Creates a new price.
    #[must_use]
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}
