use serde::{Deserialize, Serialize};

use crate::address::{Detection, RawAddress};

/// District label used when neither a rule nor the street table knows the street.
pub const UNKNOWN_DISTRICT: &str = "Bezirk Unbekannt";

/// Which stage produced the district of a [`ResolutionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    /// A built-in or loaded street rule matched.
    Rule,
    /// The imported street table had an entry.
    Table,
    /// Nothing matched; the district is [`UNKNOWN_DISTRICT`].
    Unknown,
}

impl ResolutionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Table => "table",
            Self::Unknown => "unknown",
        }
    }
}

/// Outcome of resolving one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Canonical street spelling for rule hits, the raw input otherwise.
    pub display_name: String,
    pub house_number: String,
    pub district: String,
    pub source: ResolutionSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection: Option<Detection>,
}

impl ResolutionResult {
    pub fn unknown(address: &RawAddress, detection: Option<Detection>) -> Self {
        Self {
            display_name: address.street.clone(),
            house_number: address.house_number.clone(),
            district: UNKNOWN_DISTRICT.to_string(),
            source: ResolutionSource::Unknown,
            detection,
        }
    }

    pub fn is_known(&self) -> bool {
        self.source != ResolutionSource::Unknown
    }
}
