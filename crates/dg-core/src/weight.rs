//! Edge weights.
//!
//! Weights are non-negative integers. Text input follows a strict rule:
//! one or more ASCII decimal digits and nothing else, so `"+3"`, `" 3"`,
//! `"3.0"` and `"-1"` are all rejected rather than coerced.

use core::fmt;
use core::str::FromStr;

use crate::{DgError, DgResult};

/// Non-negative integer edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);
    pub const MAX: Weight = Weight(u32::MAX);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Weight> for u64 {
    fn from(w: Weight) -> Self {
        u64::from(w.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Weight {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weight(s)
    }
}

/// Parse a weight from user-entered text.
pub fn parse_weight(input: &str) -> DgResult<Weight> {
    let invalid = |reason| DgError::InvalidWeight {
        input: input.to_string(),
        reason,
    };

    if input.is_empty() {
        return Err(invalid("weight must not be empty"));
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("weight must be a non-negative whole number"));
    }
    input
        .parse::<u32>()
        .map(Weight)
        .map_err(|_| invalid("weight is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_weight("0").unwrap(), Weight::ZERO);
        assert_eq!(parse_weight("42").unwrap().get(), 42);
        assert_eq!(parse_weight("007").unwrap().get(), 7);
        assert_eq!(parse_weight("4294967295").unwrap(), Weight::MAX);
    }

    #[test]
    fn rejects_non_digits() {
        for bad in ["", "-1", "+1", " 1", "1 ", "1.5", "abc", "1e3", "٣"] {
            let err = parse_weight(bad).unwrap_err();
            assert!(
                matches!(err, DgError::InvalidWeight { ref input, .. } if input == bad),
                "{bad:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        let err = parse_weight("4294967296").unwrap_err();
        assert!(format!("{err}").contains("too large"));
    }

    #[test]
    fn from_str_matches_parse_weight() {
        let w: Weight = "12".parse().unwrap();
        assert_eq!(w, Weight::new(12));
        assert_eq!(u64::from(w), 12);
        assert_eq!(w.to_string(), "12");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_u32_round_trips(v in any::<u32>()) {
            prop_assert_eq!(parse_weight(&v.to_string()).unwrap().get(), v);
        }

        #[test]
        fn negative_numbers_are_rejected(v in 1_i64..=i64::from(u32::MAX)) {
            let is_invalid = matches!(
                parse_weight(&(-v).to_string()),
                Err(DgError::InvalidWeight { .. })
            );
            prop_assert!(is_invalid);
        }
    }
}
