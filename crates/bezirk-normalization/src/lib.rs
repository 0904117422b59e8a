//! Street-name normalization and house-number parsing.
//!
//! Both the street rules and the imported street table key on
//! [`StreetKey`], so every lookup must go through [`normalize_street_name`].

#![deny(unsafe_code)]

pub mod house_number;
pub mod street;

pub use house_number::{HouseNumber, InvalidHouseNumber};
pub use street::{StreetKey, normalize_street_name};
