//! Per-currency formatting rules.

use std::num::NonZeroU64;

/// Formatting rules for one currency.
///
/// Entries in the currency table are only ever handed out as
/// `&'static CurrencyInfo`, so they cannot change once the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Short symbol placed before the number (e.g. `$`, `£`).
    pub symbol: &'static str,
    /// Number of minor units per major unit (i.e. cents per dollar).
    pub minor_per_major: NonZeroU64,
    /// Symbol between the major and minor parts (e.g. the period in "1.23").
    pub decimal_separator: &'static str,
    /// Symbol between digit groups of the major part (e.g. "," in "1,000,000").
    pub places_separator: &'static str,
    /// Magnitude of each digit group (e.g. 1000 for "1,000,000").
    ///
    /// Zero means the major part is never grouped.
    pub places_magnitude: u64,
}

impl CurrencyInfo {
    /// Returns true if the major part is split into digit groups.
    ///
    /// Magnitudes of 0 and 1 leave the major part ungrouped; dividing by 1
    /// would never reduce it.
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        self.places_magnitude > 1
    }

    /// Width the minor part is zero-padded to.
    #[must_use]
    pub const fn minor_width(&self) -> usize {
        digit_width(self.minor_per_major.get())
    }

    /// Width every non-leading digit group is zero-padded to.
    #[must_use]
    pub const fn group_width(&self) -> usize {
        digit_width(self.places_magnitude)
    }
}

/// Number of decimal digits needed for `magnitude - 1`, i.e.
/// `ceil(log10(magnitude))`, without going through floats.
const fn digit_width(magnitude: u64) -> usize {
    let mut width = 0;
    let mut reach: u64 = 1;
    while reach < magnitude {
        width += 1;
        match reach.checked_mul(10) {
            Some(next) => reach = next,
            None => break,
        }
    }
    width
}

/// Builds a `NonZeroU64` divisor for use in `const` table entries.
pub(crate) const fn per_major(minor_units: u64) -> NonZeroU64 {
    match NonZeroU64::new(minor_units) {
        Some(n) => n,
        None => panic!("minor units per major unit must be positive"),
    }
}
