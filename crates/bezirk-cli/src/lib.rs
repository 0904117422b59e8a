//! Library components of the `bezirk` command-line tool.

pub mod batch;
pub mod logging;
