//! District resolution for street addresses.
//!
//! [`resolve`] runs the street rules and falls back to an imported
//! street table; [`Session`] bundles both for a host application.

#![deny(unsafe_code)]

pub mod announce;
pub mod error;
pub mod resolve;
pub mod rules;
pub mod session;

pub use announce::{Announcement, announcement, district_number, translate_district};
pub use error::RuleSetError;
pub use resolve::resolve;
pub use rules::{
    GroupOutcome, Parity, RangeTest, RuleBranch, RuleMatch, RuleSet, StreetRule, load_rule_set,
};
pub use session::{ImportSummary, Session, SessionOptions};
