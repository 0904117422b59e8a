//! Street table import and recognition reply decoding.

pub mod error;
pub mod recognition;
pub mod street_table;

pub use error::{IngestError, Result};
pub use recognition::{RecognizedAddress, UNRECOGNIZED_STREET, parse_recognition_reply};
pub use street_table::{
    DuplicateStreet, SkipReason, SkippedLine, StreetTable, TableImport, load_street_table,
    parse_street_table,
};
