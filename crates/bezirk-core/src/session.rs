//! Session state owned by the host application.
//!
//! A session holds the active rule set and the current street table. Table
//! imports replace the whole table and only on success; a failed import
//! leaves the previous table in place. Imports take `&mut self`, so they
//! cannot overlap with each other or with resolution.

use std::mem;
use std::path::Path;

use bezirk_ingest::{
    DuplicateStreet, RecognizedAddress, SkippedLine, StreetTable, TableImport, load_street_table,
    parse_street_table,
};
use bezirk_model::{Detection, Language, RawAddress, ResolutionResult};
use tracing::info;

use crate::announce::{Announcement, announcement, translate_district};
use crate::resolve::resolve;
use crate::rules::RuleSet;

/// Options for a new [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub rules: RuleSet,
    pub language: Language,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Counts and diagnostics of a completed table import.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub entries: usize,
    pub skipped: Vec<SkippedLine>,
    pub duplicates: Vec<DuplicateStreet>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    options: SessionOptions,
    table: StreetTable,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            table: StreetTable::new(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.options.rules
    }

    pub fn language(&self) -> Language {
        self.options.language
    }

    pub fn table(&self) -> &StreetTable {
        &self.table
    }

    pub fn has_table(&self) -> bool {
        !self.table.is_empty()
    }

    /// Replace the street table with one built from `text`.
    pub fn import_text(&mut self, text: &str) -> ImportSummary {
        self.replace_table(parse_street_table(text))
    }

    /// Replace the street table with one read from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read; the current table is kept.
    pub fn import_path(&mut self, path: &Path) -> bezirk_ingest::Result<ImportSummary> {
        let import = load_street_table(path)?;
        Ok(self.replace_table(import))
    }

    pub fn clear_table(&mut self) {
        self.table = StreetTable::new();
    }

    fn replace_table(&mut self, import: TableImport) -> ImportSummary {
        let TableImport {
            table,
            skipped,
            duplicates,
        } = import;
        let previous = mem::replace(&mut self.table, table);
        info!(
            entries = self.table.len(),
            replaced = previous.len(),
            "street table replaced"
        );
        ImportSummary {
            entries: self.table.len(),
            skipped,
            duplicates,
        }
    }

    pub fn resolve(&self, address: &RawAddress, detection: Option<Detection>) -> ResolutionResult {
        resolve(&self.options.rules, Some(&self.table), address, detection)
    }

    /// Resolve a recognition result; `None` when no street was recognized.
    pub fn resolve_recognized(&self, recognized: &RecognizedAddress) -> Option<ResolutionResult> {
        if recognized.is_unrecognized() {
            return None;
        }
        let detection = (!recognized.detection.is_empty()).then_some(recognized.detection);
        Some(self.resolve(&recognized.address, detection))
    }

    pub fn translate(&self, district: &str) -> String {
        translate_district(district, self.options.language)
    }

    pub fn announce(&self, result: &ResolutionResult) -> Option<Announcement> {
        announcement(result, self.options.language)
    }
}
