//! House numbers with optional letter suffixes ("12", "12a", "7B").
//!
//! Raw input from recognition or users is parsed leniently with
//! [`HouseNumber::parse`]: anything that is not digits followed by letters
//! becomes house number `0`. Rule definitions use the strict [`FromStr`]
//! impl so a typo in a range bound is reported instead of silently
//! becoming `0`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static HOUSE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([a-zA-Z]*)$").expect("Invalid house number regex"));

/// A strictly parsed house number string was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid house number: {value:?}")]
pub struct InvalidHouseNumber {
    pub value: String,
}

/// Parsed house number, ordered by number first and suffix second.
///
/// `2 < 2a < 2b < 2c < 3`. Field order matters for the derived `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HouseNumber {
    number: u64,
    suffix: String,
}

impl HouseNumber {
    /// Build a house number from parts; the suffix is lowercased.
    pub fn new(number: u64, suffix: &str) -> Self {
        Self {
            number,
            suffix: suffix.to_lowercase(),
        }
    }

    /// Lenient parse: malformed input yields the zero value instead of an error.
    pub fn parse(raw: &str) -> Self {
        split(raw).unwrap_or_default()
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Parity ignores the suffix; zero counts as even.
    pub fn is_even(&self) -> bool {
        self.number % 2 == 0
    }

    /// `self <= bound`, comparing suffixes when the numbers are equal.
    pub fn is_at_most(&self, bound: &HouseNumber) -> bool {
        if self.number != bound.number {
            self.number < bound.number
        } else {
            self.suffix <= bound.suffix
        }
    }

    /// `self >= bound`, comparing suffixes when the numbers are equal.
    pub fn is_at_least(&self, bound: &HouseNumber) -> bool {
        if self.number != bound.number {
            self.number > bound.number
        } else {
            self.suffix >= bound.suffix
        }
    }

    /// Inclusive on both ends.
    pub fn is_within(&self, from: &HouseNumber, to: &HouseNumber) -> bool {
        self.is_at_least(from) && self.is_at_most(to)
    }
}

fn split(raw: &str) -> Option<HouseNumber> {
    let captures = HOUSE_NUMBER_REGEX.captures(raw)?;
    let number = captures.get(1)?.as_str().parse::<u64>().ok()?;
    let suffix = captures.get(2).map_or("", |m| m.as_str());
    Some(HouseNumber::new(number, suffix))
}

impl FromStr for HouseNumber {
    type Err = InvalidHouseNumber;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        split(raw).ok_or_else(|| InvalidHouseNumber {
            value: raw.to_string(),
        })
    }
}

impl TryFrom<String> for HouseNumber {
    type Error = InvalidHouseNumber;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HouseNumber> for String {
    fn from(value: HouseNumber) -> Self {
        value.to_string()
    }
}

impl fmt::Display for HouseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_and_suffix() {
        let parsed = HouseNumber::parse("12A");
        assert_eq!(parsed.number(), 12);
        assert_eq!(parsed.suffix(), "a");
        assert_eq!(HouseNumber::parse("7bc"), HouseNumber::new(7, "bc"));
        assert_eq!(HouseNumber::parse("007"), HouseNumber::new(7, ""));
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        for raw in ["", "abc", "12-14", " 12", "12 a", "a12", "12ä", "١٢"] {
            assert_eq!(HouseNumber::parse(raw), HouseNumber::default(), "{raw:?}");
        }
    }

    #[test]
    fn overflowing_number_degrades_to_zero() {
        assert_eq!(
            HouseNumber::parse("99999999999999999999999"),
            HouseNumber::default()
        );
    }

    #[test]
    fn strict_parse_rejects_malformed() {
        assert_eq!("44b".parse::<HouseNumber>(), Ok(HouseNumber::new(44, "b")));
        assert!("".parse::<HouseNumber>().is_err());
        assert!("b44".parse::<HouseNumber>().is_err());
    }

    #[test]
    fn suffix_order_within_same_number() {
        let two = HouseNumber::parse("2");
        let two_a = HouseNumber::parse("2a");
        let two_c = HouseNumber::parse("2c");
        let three = HouseNumber::parse("3");
        assert!(two < two_a && two_a < two_c && two_c < three);
        assert!(two_a.is_at_most(&two_c));
        assert!(two_c.is_at_least(&two_a));
        assert!(!three.is_at_most(&two_c));
    }

    #[test]
    fn bounds_are_inclusive_on_equal_suffix() {
        let bound = HouseNumber::new(44, "b");
        let value = HouseNumber::parse("44B");
        assert!(value.is_at_most(&bound));
        assert!(value.is_at_least(&bound));
        assert!(value.is_within(&bound, &bound));
    }

    #[test]
    fn parity_ignores_suffix() {
        assert!(HouseNumber::parse("12a").is_even());
        assert!(!HouseNumber::parse("7b").is_even());
        assert!(HouseNumber::parse("garbage").is_even());
    }

    #[test]
    fn serde_uses_display_form() {
        let json = serde_json::to_string(&HouseNumber::new(71, "a")).unwrap();
        assert_eq!(json, "\"71a\"");
        let parsed: HouseNumber = serde_json::from_str("\"2C\"").unwrap();
        assert_eq!(parsed, HouseNumber::new(2, "c"));
        assert!(serde_json::from_str::<HouseNumber>("\"x\"").is_err());
    }
}
