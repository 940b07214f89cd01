//! Price formatting.
//!
//! An amount of minor units is split into major and minor parts by the
//! currency's `minor_per_major`. The major part is grouped from the
//! least-significant end; every group except the leading one is zero-padded
//! to the group width. The minor part is zero-padded to the width needed for
//! `minor_per_major - 1`.

use currfmt_shared::{FormatError, FormatResult, FormatterConfig, Price, ZeroMajor};
use tracing::debug;

use super::info::CurrencyInfo;
use super::table;

/// Formats prices using the currency table.
///
/// The default formatter reproduces the established output exactly,
/// including `"$.00"` for a zero amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFormatter {
    zero_major: ZeroMajor,
}

impl PriceFormatter {
    /// Creates a formatter with the given zero-major policy.
    #[must_use]
    pub const fn new(zero_major: ZeroMajor) -> Self {
        Self { zero_major }
    }

    /// Creates a formatter from the formatter section of the app config.
    #[must_use]
    pub const fn from_config(config: &FormatterConfig) -> Self {
        Self::new(config.zero_major)
    }

    /// Returns the zero-major policy.
    #[must_use]
    pub const fn zero_major(&self) -> ZeroMajor {
        self.zero_major
    }

    /// Formats `amount` minor units of `currency_code`.
    ///
    /// The output is `sign + symbol + grouped major + decimal separator +
    /// padded minor`, where the sign is a single leading `-` for negative
    /// amounts.
    ///
    /// # Example
    ///
    /// ```
    /// use currfmt_core::PriceFormatter;
    ///
    /// let formatter = PriceFormatter::default();
    /// assert_eq!(formatter.format(100_000, "USD").unwrap(), "$1,000.00");
    /// assert_eq!(formatter.format(-100_000, "GBP").unwrap(), "-£1.000,00");
    /// ```
    pub fn format(&self, amount: i64, currency_code: &str) -> FormatResult<String> {
        let Some(info) = table::lookup(currency_code) else {
            debug!(currency = currency_code, "unknown currency code");
            return Err(FormatError::UnknownCurrency(currency_code.to_string()));
        };

        let sign = if amount < 0 { "-" } else { "" };
        // unsigned_abs keeps i64::MIN exact.
        let value = amount.unsigned_abs();
        let divisor = info.minor_per_major.get();
        let (major, minor) = (value / divisor, value % divisor);

        let grouped = if major == 0 && self.zero_major == ZeroMajor::Digit {
            "0".to_string()
        } else {
            group_digits(major, info)
        };

        Ok(format!(
            "{sign}{symbol}{grouped}{decimal}{minor}",
            symbol = info.symbol,
            decimal = info.decimal_separator,
            minor = pad_left_zeros(minor, info.minor_width()),
        ))
    }

    /// Formats a [`Price`].
    pub fn format_price(&self, price: &Price) -> FormatResult<String> {
        self.format(price.amount, &price.currency)
    }
}

/// Formats `amount` minor units of `currency_code` with the default formatter.
///
/// Fails with [`FormatError::UnknownCurrency`] if the code is not in the
/// currency table.
pub fn format_price(amount: i64, currency_code: &str) -> FormatResult<String> {
    PriceFormatter::default().format(amount, currency_code)
}

/// Renders `value` in the currency's digit groups, most significant first.
///
/// Zero renders as an empty string.
fn group_digits(value: u64, info: &CurrencyInfo) -> String {
    if value == 0 {
        return String::new();
    }
    if !info.is_grouped() {
        return value.to_string();
    }

    let magnitude = info.places_magnitude;
    let width = info.group_width();
    let mut groups = Vec::new();
    let mut rest = value;
    while rest != 0 {
        let group = rest % magnitude;
        rest /= magnitude;
        if rest == 0 {
            groups.push(group.to_string());
        } else {
            groups.push(pad_left_zeros(group, width));
        }
    }

    groups.reverse();
    groups.join(info.places_separator)
}

fn pad_left_zeros(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}
