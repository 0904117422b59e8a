//! Batch resolution of address lists.
//!
//! Input is CSV with a `street,number` header (the number column may be
//! missing). Output is CSV with `street,number,district,source`, where
//! `street` is the display name of the result.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use bezirk_core::Session;
use bezirk_model::{RawAddress, ResolutionSource};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::logging::redact_value;

#[derive(Debug, Deserialize)]
struct AddressRecord {
    street: String,
    #[serde(default)]
    number: String,
}

#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    street: &'a str,
    number: &'a str,
    district: &'a str,
    source: &'a str,
}

/// Per-source counts of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub by_rule: usize,
    pub by_table: usize,
    pub unknown: usize,
}

impl BatchSummary {
    fn record(&mut self, source: ResolutionSource) {
        self.total += 1;
        match source {
            ResolutionSource::Rule => self.by_rule += 1,
            ResolutionSource::Table => self.by_table += 1,
            ResolutionSource::Unknown => self.unknown += 1,
        }
    }
}

/// Resolve every record of `input` and write one result row per record.
///
/// # Errors
///
/// Returns an error if the input is not valid CSV or the output cannot be written.
pub fn resolve_batch<R: Read, W: Write>(
    session: &Session,
    input: R,
    output: W,
) -> Result<BatchSummary> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);
    let mut writer = WriterBuilder::new().from_writer(output);
    let mut summary = BatchSummary::default();

    for (index, record) in reader.deserialize::<AddressRecord>().enumerate() {
        let record = record.with_context(|| format!("read address record {}", index + 1))?;
        let address = RawAddress::new(record.street, record.number);
        let result = session.resolve(&address, None);
        debug!(
            street = redact_value(&address.street),
            number = redact_value(&address.house_number),
            district = %result.district,
            source = result.source.as_str(),
            "address resolved"
        );
        writer
            .serialize(ResultRecord {
                street: &result.display_name,
                number: &result.house_number,
                district: &result.district,
                source: result.source.as_str(),
            })
            .with_context(|| format!("write result record {}", index + 1))?;
        summary.record(result.source);
    }
    writer.flush().context("flush batch output")?;

    info!(
        total = summary.total,
        by_rule = summary.by_rule,
        by_table = summary.by_table,
        unknown = summary.unknown,
        "batch complete"
    );
    Ok(summary)
}
