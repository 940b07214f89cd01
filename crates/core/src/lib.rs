//! Price formatting for currfmt.
//!
//! This crate contains pure formatting logic with ZERO I/O dependencies.
//! It turns an integer count of minor currency units into a display string
//! using a fixed, read-only table of per-currency rules.
//!
//! # Modules
//!
//! - `currency` - Currency table and the price formatter

pub mod currency;

pub use currency::{CurrencyInfo, PriceFormatter, format_price};
