//! Address and resolution value types shared by the bezirk crates.

pub mod address;
pub mod error;
pub mod language;
pub mod resolution;

pub use address::{Detection, DetectionBox, RawAddress};
pub use error::{ModelError, Result};
pub use language::Language;
pub use resolution::{ResolutionResult, ResolutionSource, UNKNOWN_DISTRICT};
