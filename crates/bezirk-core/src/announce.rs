//! Localized district labels and speech output text.
//!
//! District labels are free text ("Bezirk 3", or whatever the imported
//! table says). Only the first digit run is localized and read aloud.

use bezirk_model::{Language, ResolutionResult};

struct Vocabulary {
    district: &'static str,
    unknown: &'static str,
}

fn vocabulary(language: Language) -> Vocabulary {
    match language {
        Language::De => Vocabulary {
            district: "Bezirk",
            unknown: "Unbekannt",
        },
        Language::En => Vocabulary {
            district: "District",
            unknown: "Unknown",
        },
        Language::Ar => Vocabulary {
            district: "المنطقة",
            unknown: "غير معروف",
        },
    }
}

/// First ASCII digit run of a district label.
pub fn district_number(label: &str) -> Option<&str> {
    let start = label.find(|ch: char| ch.is_ascii_digit())?;
    let rest = &label[start..];
    let len = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Render a district label in the given language.
///
/// Unknown labels become the localized "unknown" word, labels with a number
/// become "<district word> <number>", anything else is returned unchanged.
pub fn translate_district(label: &str, language: Language) -> String {
    if label.is_empty() {
        return String::new();
    }
    let words = vocabulary(language);
    if label.contains("Unbekannt") || label.contains("Unknown") {
        return words.unknown.to_string();
    }
    match district_number(label) {
        Some(number) => format!("{} {number}", words.district),
        None => label.to_string(),
    }
}

/// Text for the speech synthesizer plus the locale to speak it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub locale: &'static str,
}

/// Speak the district number; `None` when the district has none.
pub fn announcement(result: &ResolutionResult, language: Language) -> Option<Announcement> {
    district_number(&result.district).map(|number| Announcement {
        text: number.to_string(),
        locale: language.speech_locale(),
    })
}
