//! Option kind.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Call or put.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both option kinds, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Intrinsic value max(S - K, 0) or max(K - S, 0).
    #[inline]
    pub fn intrinsic(&self, underlying: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (underlying - strike).max(0.0),
            OptionType::Put => (strike - underlying).max(0.0),
        }
    }

    /// Lowercase name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::invalid_argument(format!(
                "unknown option type '{}': expected call or put",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_call() {
        assert_eq!(OptionType::Call.intrinsic(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.intrinsic(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_put() {
        assert_eq!(OptionType::Put.intrinsic(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.intrinsic(120.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("p".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for kind in OptionType::ALL {
            assert_eq!(kind.to_string().parse::<OptionType>().unwrap(), kind);
        }
    }
}
