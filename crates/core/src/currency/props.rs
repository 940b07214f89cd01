//! Property-based tests for price formatting.

use proptest::prelude::*;

use super::format::format_price;
use super::table::{codes, lookup};

/// Strategy to pick a supported currency code.
fn known_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(codes())
}

/// Strategy to generate a code missing from the table.
fn unknown_code() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,5}".prop_filter("code must not be in the table", |code| {
        lookup(code).is_none()
    })
}

/// Strategy to generate a non-negative amount of minor units.
fn non_negative_amount() -> impl Strategy<Value = i64> {
    prop_oneof![0i64..1_000_000, 0i64..i64::MAX]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Known codes never fail for non-negative amounts.
    #[test]
    fn prop_known_codes_never_fail(
        code in known_code(),
        amount in non_negative_amount(),
    ) {
        prop_assert!(format_price(amount, code).is_ok());
    }

    /// Unknown codes always fail with the quoted code in the message.
    #[test]
    fn prop_unknown_codes_fail(
        code in unknown_code(),
        amount in any::<i64>(),
    ) {
        let err = format_price(amount, &code).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("unknown currency: \"{code}\""));
    }

    /// A negative amount is the positive rendering with one leading minus.
    #[test]
    fn prop_negation_prepends_minus(
        code in known_code(),
        amount in 1i64..=i64::MAX,
    ) {
        let positive = format_price(amount, code).unwrap();
        let negative = format_price(-amount, code).unwrap();
        prop_assert_eq!(negative, format!("-{positive}"));
    }

    /// Every non-leading group of a grouped major part is three digits wide.
    #[test]
    fn prop_usd_groups_are_padded(amount in 100_000i64..=i64::MAX) {
        let formatted = format_price(amount, "USD").unwrap();
        let body = formatted.strip_prefix('$').unwrap();
        let (major, minor) = body.split_once('.').unwrap();
        prop_assert_eq!(minor.len(), 2);

        let groups: Vec<&str> = major.split(',').collect();
        prop_assert!(groups.len() > 1);
        prop_assert!((1..=3).contains(&groups[0].len()));
        prop_assert!(!groups[0].starts_with('0'));
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// Stripping symbol and separators from a USD rendering gives back the amount.
    #[test]
    fn prop_usd_digits_preserve_amount(amount in non_negative_amount()) {
        let formatted = format_price(amount, "USD").unwrap();
        let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(digits.parse::<i64>().unwrap(), amount);
    }

    /// JPY never inserts a group separator and never pads the major part.
    #[test]
    fn prop_jpy_is_ungrouped(amount in non_negative_amount()) {
        let formatted = format_price(amount, "JPY").unwrap();
        let major = amount / 2;
        let expected_major = if major == 0 { String::new() } else { major.to_string() };
        prop_assert_eq!(formatted, format!("¥{expected_major}{}", amount % 2));
    }
}
