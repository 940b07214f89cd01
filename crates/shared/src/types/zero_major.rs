//! Rendering policy for a zero major part.

use serde::{Deserialize, Serialize};

/// How the major part of an amount below one major unit is rendered.
///
/// `Empty` keeps the established output, where `0` cents in USD renders as
/// `"$.00"`. `Digit` emits a single `0` group instead (`"$0.00"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroMajor {
    /// Render nothing for a zero major part.
    #[default]
    Empty,
    /// Render a single `0` for a zero major part.
    Digit,
}

impl std::fmt::Display for ZeroMajor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Digit => write!(f, "digit"),
        }
    }
}

impl std::str::FromStr for ZeroMajor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "digit" => Ok(Self::Digit),
            _ => Err(format!("Unknown zero-major policy: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(ZeroMajor::default(), ZeroMajor::Empty);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ZeroMajor::from_str("empty").unwrap(), ZeroMajor::Empty);
        assert_eq!(ZeroMajor::from_str("DIGIT").unwrap(), ZeroMajor::Digit);
        assert!(ZeroMajor::from_str("zero").is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for policy in [ZeroMajor::Empty, ZeroMajor::Digit] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{policy}\""));
        }
    }
}
