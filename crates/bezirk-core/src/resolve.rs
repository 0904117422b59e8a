//! Address resolution: street rules first, then the street table.

use bezirk_ingest::StreetTable;
use bezirk_model::{Detection, RawAddress, ResolutionResult, ResolutionSource};
use bezirk_normalization::{HouseNumber, normalize_street_name};
use tracing::debug;

use crate::rules::RuleSet;

/// Resolve one address. Never fails; unmatched streets get the unknown district.
///
/// Rule hits report the rule's canonical street spelling, table hits and
/// misses echo the raw street name. Detection metadata is passed through
/// untouched.
pub fn resolve(
    rules: &RuleSet,
    table: Option<&StreetTable>,
    address: &RawAddress,
    detection: Option<Detection>,
) -> ResolutionResult {
    let key = normalize_street_name(&address.street);
    let number = HouseNumber::parse(&address.house_number);

    if let Some(found) = rules.apply(&key, &number) {
        return ResolutionResult {
            display_name: found.display_name.to_string(),
            house_number: address.house_number.clone(),
            district: found.district.to_string(),
            source: ResolutionSource::Rule,
            detection,
        };
    }

    if let Some(district) = table.and_then(|table| table.lookup(&key)) {
        debug!(district, "street table matched");
        return ResolutionResult {
            display_name: address.street.clone(),
            house_number: address.house_number.clone(),
            district: district.to_string(),
            source: ResolutionSource::Table,
            detection,
        };
    }

    debug!("no street rule or table entry matched");
    ResolutionResult::unknown(address, detection)
}
