//! Street rules: data-driven district assignment by parity and number range.
//!
//! A [`RuleSet`] is an ordered list of [`StreetRule`] groups. Each group is
//! keyed by a marker substring of the normalized street name and holds
//! ordered [`RuleBranch`]es. Evaluation walks the groups in order:
//!
//! - marker not contained in the key: skip the group;
//! - marker contained, first branch whose parity and ranges accept the
//!   number: return that branch's district;
//! - marker contained but no branch accepts: continue with the next group.
//!
//! The last case keeps a later group reachable for a street whose name also
//! contains an earlier group's marker.

mod builtin;

use std::fs;
use std::path::Path;

use bezirk_normalization::{HouseNumber, StreetKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, RuleSetError};

/// Parity filter of a branch; parity ignores the letter suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    #[default]
    Any,
    Even,
    Odd,
}

impl Parity {
    pub fn accepts(self, number: &HouseNumber) -> bool {
        match self {
            Self::Any => true,
            Self::Even => number.is_even(),
            Self::Odd => !number.is_even(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

/// Inclusive house-number range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RangeTest {
    /// Bounds on the numeric part only; "3a" is inside `1..=3`.
    Numbers { from: u64, to: u64 },
    /// Bounds compared with the suffix; "44c" is outside `4..=44b`.
    Suffixed { from: HouseNumber, to: HouseNumber },
}

impl RangeTest {
    pub fn contains(&self, number: &HouseNumber) -> bool {
        match self {
            Self::Numbers { from, to } => (*from..=*to).contains(&number.number()),
            Self::Suffixed { from, to } => number.is_within(from, to),
        }
    }

    fn is_inverted(&self) -> bool {
        match self {
            Self::Numbers { from, to } => from > to,
            Self::Suffixed { from, to } => from > to,
        }
    }

    fn bounds(&self) -> (String, String) {
        match self {
            Self::Numbers { from, to } => (from.to_string(), to.to_string()),
            Self::Suffixed { from, to } => (from.to_string(), to.to_string()),
        }
    }
}

/// One district outcome within a street group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBranch {
    #[serde(default)]
    pub parity: Parity,
    /// Any-of; an empty list accepts every number of the right parity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<RangeTest>,
    pub district: String,
}

impl RuleBranch {
    pub fn new(parity: Parity, ranges: Vec<RangeTest>, district: impl Into<String>) -> Self {
        Self {
            parity,
            ranges,
            district: district.into(),
        }
    }

    pub fn accepts(&self, number: &HouseNumber) -> bool {
        self.parity.accepts(number)
            && (self.ranges.is_empty() || self.ranges.iter().any(|range| range.contains(number)))
    }
}

/// Rules for one street, selected by a marker substring of the street key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetRule {
    pub marker: String,
    /// Canonical spelling reported for every match in this group.
    pub display_name: String,
    pub branches: Vec<RuleBranch>,
}

/// Outcome of evaluating a single street group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOutcome<'a> {
    /// The street key does not contain the group's marker.
    OtherStreet,
    /// The marker matched but no branch accepted the house number.
    NoBranch,
    Matched(RuleMatch<'a>),
}

/// District assigned by a street rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub display_name: &'a str,
    pub district: &'a str,
}

impl StreetRule {
    pub fn new(
        marker: impl Into<String>,
        display_name: impl Into<String>,
        branches: Vec<RuleBranch>,
    ) -> Self {
        Self {
            marker: marker.into(),
            display_name: display_name.into(),
            branches,
        }
    }

    pub fn evaluate(&self, key: &StreetKey, number: &HouseNumber) -> GroupOutcome<'_> {
        if !key.contains(&self.marker) {
            return GroupOutcome::OtherStreet;
        }
        self.branches
            .iter()
            .find(|branch| branch.accepts(number))
            .map_or(GroupOutcome::NoBranch, |branch| {
                GroupOutcome::Matched(RuleMatch {
                    display_name: &self.display_name,
                    district: &branch.district,
                })
            })
    }
}

/// Ordered street rule groups, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    streets: Vec<StreetRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    pub fn new(streets: Vec<StreetRule>) -> Self {
        Self { streets }
    }

    /// Rule set without any street rules; every address falls back to the table.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The street rules shipped with the application.
    pub fn builtin() -> Self {
        Self::new(builtin::streets())
    }

    /// Parse and validate a JSON rule set.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a rule is unusable.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn streets(&self) -> &[StreetRule] {
        &self.streets
    }

    pub fn len(&self) -> usize {
        self.streets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }

    /// Check that every group can match and every range is ordered.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        for (index, street) in self.streets.iter().enumerate() {
            if street.marker.is_empty() {
                return Err(RuleSetError::EmptyMarker { index });
            }
            // No normalized key can contain these.
            if street.marker.to_lowercase() != street.marker
                || street.marker.chars().any(char::is_whitespace)
                || street.marker.contains("straße")
            {
                return Err(RuleSetError::UnmatchableMarker {
                    index,
                    marker: street.marker.clone(),
                });
            }
            for branch in &street.branches {
                if branch.district.trim().is_empty() {
                    return Err(RuleSetError::EmptyDistrict {
                        street: street.display_name.clone(),
                    });
                }
                if let Some(range) = branch.ranges.iter().find(|range| range.is_inverted()) {
                    let (from, to) = range.bounds();
                    return Err(RuleSetError::InvertedRange {
                        street: street.display_name.clone(),
                        from,
                        to,
                    });
                }
            }
        }
        Ok(())
    }

    /// Evaluate the groups in order; `None` means "try the street table".
    pub fn apply(&self, key: &StreetKey, number: &HouseNumber) -> Option<RuleMatch<'_>> {
        for street in &self.streets {
            match street.evaluate(key, number) {
                GroupOutcome::OtherStreet => {}
                GroupOutcome::NoBranch => {
                    trace!(marker = %street.marker, "street rule matched without a branch");
                }
                GroupOutcome::Matched(found) => {
                    debug!(
                        marker = %street.marker,
                        district = found.district,
                        "street rule matched"
                    );
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Read and validate a JSON rule file.
///
/// # Errors
///
/// Returns an error if the file is unreadable, malformed, or invalid.
pub fn load_rule_set(path: &Path) -> Result<RuleSet> {
    let json = fs::read_to_string(path).map_err(|source| RuleSetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = RuleSet::from_json_str(&json)?;
    debug!(path = %path.display(), streets = rules.len(), "rule set loaded");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use bezirk_normalization::normalize_street_name;

    use super::*;

    fn suffixed(from: (u64, &str), to: (u64, &str)) -> RangeTest {
        RangeTest::Suffixed {
            from: HouseNumber::new(from.0, from.1),
            to: HouseNumber::new(to.0, to.1),
        }
    }

    #[test]
    fn numbers_range_ignores_suffix() {
        let range = RangeTest::Numbers { from: 1, to: 3 };
        assert!(range.contains(&HouseNumber::parse("3z")));
        assert!(range.contains(&HouseNumber::parse("1")));
        assert!(!range.contains(&HouseNumber::parse("4")));
    }

    #[test]
    fn suffixed_range_respects_suffix() {
        let range = suffixed((4, ""), (44, "b"));
        assert!(range.contains(&HouseNumber::parse("4")));
        assert!(range.contains(&HouseNumber::parse("44b")));
        assert!(!range.contains(&HouseNumber::parse("44c")));
        assert!(!range.contains(&HouseNumber::parse("3z")));
    }

    #[test]
    fn branch_without_ranges_accepts_parity() {
        let branch = RuleBranch::new(Parity::Even, vec![], "Bezirk 9");
        assert!(branch.accepts(&HouseNumber::parse("0")));
        assert!(!branch.accepts(&HouseNumber::parse("7")));
    }

    #[test]
    fn group_distinguishes_other_street_from_no_branch() {
        let rule = StreetRule::new(
            "lindenweg",
            "Lindenweg",
            vec![RuleBranch::new(
                Parity::Odd,
                vec![RangeTest::Numbers { from: 1, to: 9 }],
                "Bezirk 4",
            )],
        );
        let key = normalize_street_name("Lindenweg");
        assert_eq!(
            rule.evaluate(
                &normalize_street_name("Eichenweg"),
                &HouseNumber::parse("1")
            ),
            GroupOutcome::OtherStreet
        );
        assert_eq!(
            rule.evaluate(&key, &HouseNumber::parse("2")),
            GroupOutcome::NoBranch
        );
        assert_eq!(
            rule.evaluate(&key, &HouseNumber::parse("3")),
            GroupOutcome::Matched(RuleMatch {
                display_name: "Lindenweg",
                district: "Bezirk 4",
            })
        );
    }

    #[test]
    fn validation_rejects_unusable_rules() {
        let empty_marker = RuleSet::new(vec![StreetRule::new("", "X", vec![])]);
        assert!(matches!(
            empty_marker.validate(),
            Err(RuleSetError::EmptyMarker { index: 0 })
        ));

        let upper_marker = RuleSet::new(vec![StreetRule::new("Gereon", "X", vec![])]);
        assert!(matches!(
            upper_marker.validate(),
            Err(RuleSetError::UnmatchableMarker { .. })
        ));

        let long_form = RuleSet::new(vec![StreetRule::new("gereonstraße", "X", vec![])]);
        assert!(!normalize_street_name("Gereonstraße").contains("gereonstraße"));
        assert!(matches!(
            long_form.validate(),
            Err(RuleSetError::UnmatchableMarker { index: 0, .. })
        ));

        let inverted = RuleSet::new(vec![StreetRule::new(
            "weg",
            "Weg",
            vec![RuleBranch::new(
                Parity::Any,
                vec![suffixed((5, "b"), (5, "a"))],
                "Bezirk 1",
            )],
        )]);
        match inverted.validate() {
            Err(RuleSetError::InvertedRange { from, to, .. }) => {
                assert_eq!((from.as_str(), to.as_str()), ("5b", "5a"));
            }
            other => panic!("expected inverted range, got {other:?}"),
        }
    }

    #[test]
    fn builtin_rules_are_valid() {
        RuleSet::builtin().validate().unwrap();
    }
}
