//! Decoding of the image-recognition service reply.
//!
//! The service answers with a JSON object:
//!
//! ```json
//! {"street": "Gereonstraße", "number": "2a",
//!  "street_box_2d": [100, 120, 180, 600], "number_box_2d": [400, 300, 460, 380]}
//! ```
//!
//! Every field is optional. A missing or empty street becomes
//! [`UNRECOGNIZED_STREET`].

use bezirk_model::{Detection, DetectionBox, RawAddress};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Street value meaning "no street sign found".
pub const UNRECOGNIZED_STREET: &str = "UNKNOWN";

#[derive(Debug, Default, Deserialize)]
struct ReplyPayload {
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    street_box_2d: Option<Vec<i32>>,
    #[serde(default)]
    number_box_2d: Option<Vec<i32>>,
}

/// Address and detection boxes extracted from a recognition reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedAddress {
    pub address: RawAddress,
    pub detection: Detection,
}

impl RecognizedAddress {
    pub fn is_unrecognized(&self) -> bool {
        self.address.street == UNRECOGNIZED_STREET
    }
}

/// Decode a recognition reply. An empty reply counts as `{}`.
///
/// # Errors
///
/// Returns an error if the reply is not a JSON object of the expected shape.
pub fn parse_recognition_reply(reply: &str) -> Result<RecognizedAddress> {
    let payload: ReplyPayload = if reply.trim().is_empty() {
        ReplyPayload::default()
    } else {
        serde_json::from_str(reply)?
    };
    let street = payload
        .street
        .filter(|street| !street.is_empty())
        .unwrap_or_else(|| UNRECOGNIZED_STREET.to_string());
    let number = payload.number.unwrap_or_default();
    let detection = Detection {
        street_box: detection_box("street", payload.street_box_2d),
        number_box: detection_box("number", payload.number_box_2d),
    };
    Ok(RecognizedAddress {
        address: RawAddress::new(street, number),
        detection,
    })
}

fn detection_box(field: &'static str, values: Option<Vec<i32>>) -> Option<DetectionBox> {
    let values = values?;
    match DetectionBox::try_from(values) {
        Ok(detection_box) => Some(detection_box),
        Err(error) => {
            debug!(field, %error, "dropping detection box");
            None
        }
    }
}
