use serde::{Deserialize, Serialize};

/// Display and speech language of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
    Ar,
}

impl Language {
    /// BCP 47 tag handed to the speech synthesizer.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Self::De => "de-DE",
            Self::En => "en-US",
            Self::Ar => "ar-SA",
        }
    }
}
