//! Formatting error types.

use thiserror::Error;

/// Result type alias using `FormatError`.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors returned when formatting a price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The currency code is not in the currency table.
    #[error("unknown currency: {0:?}")]
    UnknownCurrency(String),
}

impl FormatError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
        }
    }
}
