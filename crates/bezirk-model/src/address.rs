//! Raw address input and detection metadata.
//!
//! Detection boxes come from the image-recognition collaborator and are
//! carried through resolution untouched. Coordinates are normalized to a
//! 0-1000 grid in `[ymin, xmin, ymax, xmax]` order.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A street name and house number exactly as they were read or typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawAddress {
    pub street: String,
    pub house_number: String,
}

impl RawAddress {
    pub fn new(street: impl Into<String>, house_number: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            house_number: house_number.into(),
        }
    }
}

/// Bounding box of a detected text region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "[i32; 4]")]
pub struct DetectionBox {
    pub ymin: i32,
    pub xmin: i32,
    pub ymax: i32,
    pub xmax: i32,
}

impl DetectionBox {
    pub const fn new(ymin: i32, xmin: i32, ymax: i32, xmax: i32) -> Self {
        Self {
            ymin,
            xmin,
            ymax,
            xmax,
        }
    }

    pub fn coordinates(&self) -> [i32; 4] {
        [self.ymin, self.xmin, self.ymax, self.xmax]
    }
}

impl TryFrom<Vec<i32>> for DetectionBox {
    type Error = ModelError;

    fn try_from(values: Vec<i32>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl TryFrom<&[i32]> for DetectionBox {
    type Error = ModelError;

    fn try_from(values: &[i32]) -> Result<Self> {
        match *values {
            [ymin, xmin, ymax, xmax] => Ok(Self::new(ymin, xmin, ymax, xmax)),
            _ => Err(ModelError::InvalidBox { len: values.len() }),
        }
    }
}

impl From<DetectionBox> for [i32; 4] {
    fn from(value: DetectionBox) -> Self {
        value.coordinates()
    }
}

/// Where the street sign and the house number were found in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Detection {
    pub street_box: Option<DetectionBox>,
    pub number_box: Option<DetectionBox>,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.street_box.is_none() && self.number_box.is_none()
    }
}
