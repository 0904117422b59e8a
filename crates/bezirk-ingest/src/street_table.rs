//! Street table import: `street;district` or `street,district` lines.
//!
//! Each line picks its own delimiter: `;` when the line contains one,
//! otherwise `,`. Only the first two fields are used. Lines that do not
//! yield a street and a district are skipped, and later lines win over
//! earlier ones that normalize to the same street.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use bezirk_normalization::{StreetKey, normalize_street_name};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

/// Normalized street name to district label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetTable {
    entries: BTreeMap<StreetKey, String>,
}

impl StreetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the replaced district.
    pub fn insert(&mut self, key: StreetKey, district: impl Into<String>) -> Option<String> {
        self.entries.insert(key, district.into())
    }

    /// Exact-key lookup.
    pub fn lookup(&self, key: &StreetKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StreetKey, &str)> {
        self.entries
            .iter()
            .map(|(key, district)| (key, district.as_str()))
    }
}

/// Why a table line did not produce an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields,
    EmptyStreet,
    EmptyDistrict,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TooFewFields => "fewer than two fields",
            Self::EmptyStreet => "empty street name",
            Self::EmptyDistrict => "empty district",
        }
    }
}

/// A non-blank line that was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source text.
    pub line_number: usize,
    pub reason: SkipReason,
}

/// A line that replaced an earlier entry for the same street key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateStreet {
    pub line_number: usize,
    pub key: StreetKey,
    pub previous_district: String,
    pub district: String,
}

/// Result of building a table, with diagnostics for ignored input.
#[derive(Debug, Clone, Default)]
pub struct TableImport {
    pub table: StreetTable,
    pub skipped: Vec<SkippedLine>,
    pub duplicates: Vec<DuplicateStreet>,
}

impl TableImport {
    pub fn has_diagnostics(&self) -> bool {
        !self.skipped.is_empty() || !self.duplicates.is_empty()
    }
}

/// Build a street table from delimited text. Never fails.
pub fn parse_street_table(text: &str) -> TableImport {
    let mut import = TableImport::default();
    for (index, raw_line) in text.split('\n').enumerate() {
        let line_number = index + 1;
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok((street, district)) => {
                let key = normalize_street_name(street);
                if let Some(previous_district) = import.table.insert(key.clone(), district) {
                    warn!(line_number, "street table line overrides an earlier entry");
                    import.duplicates.push(DuplicateStreet {
                        line_number,
                        key,
                        previous_district,
                        district: district.to_string(),
                    });
                }
            }
            Err(reason) => {
                warn!(
                    line_number,
                    reason = reason.as_str(),
                    "skipping street table line"
                );
                import.skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }
    info!(
        entries = import.table.len(),
        skipped = import.skipped.len(),
        duplicates = import.duplicates.len(),
        "street table built"
    );
    import
}

fn parse_line(line: &str) -> std::result::Result<(&str, &str), SkipReason> {
    let delimiter = if line.contains(';') { ';' } else { ',' };
    let mut fields = line.split(delimiter);
    let (Some(street), Some(district)) = (fields.next(), fields.next()) else {
        return Err(SkipReason::TooFewFields);
    };
    let street = street.trim();
    let district = district.trim();
    if street.is_empty() {
        return Err(SkipReason::EmptyStreet);
    }
    if district.is_empty() {
        return Err(SkipReason::EmptyDistrict);
    }
    Ok((street, district))
}

/// Read a UTF-8 table file and build a street table from it.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not UTF-8. No
/// partial table is produced in that case.
pub fn load_street_table(path: &Path) -> Result<TableImport> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::Encoding {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "street table file read");
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(parse_street_table(text))
}
