//! The currency table.
//!
//! Frozen configuration data: built once on first use and never mutated.
//! Add a currency by adding a `const` entry and listing it in `CURRENCIES`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::info::{CurrencyInfo, per_major};

const USD: CurrencyInfo = CurrencyInfo {
    symbol: "$",
    minor_per_major: per_major(100),
    decimal_separator: ".",
    places_separator: ",",
    places_magnitude: 1000,
};

const GBP: CurrencyInfo = CurrencyInfo {
    symbol: "£",
    minor_per_major: per_major(100),
    decimal_separator: ",",
    places_separator: ".",
    places_magnitude: 1000,
};

const JPY: CurrencyInfo = CurrencyInfo {
    symbol: "¥",
    minor_per_major: per_major(2),
    decimal_separator: "",
    places_separator: "",
    places_magnitude: 0,
};

/// ISO 4217 code to formatting rules.
static CURRENCIES: Lazy<HashMap<&'static str, CurrencyInfo>> =
    Lazy::new(|| HashMap::from([("USD", USD), ("GBP", GBP), ("JPY", JPY)]));

/// Looks up the rules for a currency code. Matching is case-sensitive.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.get(code)
}

/// Returns every supported currency code, sorted.
#[must_use]
pub fn codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = CURRENCIES.keys().copied().collect();
    codes.sort_unstable();
    codes
}
