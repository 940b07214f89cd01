//! Currency table and price formatting.

pub mod format;
pub mod info;
pub mod table;

#[cfg(test)]
mod props;

pub use format::{PriceFormatter, format_price};
pub use info::CurrencyInfo;
pub use table::{codes, lookup};
