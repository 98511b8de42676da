//! Free-text biography summary

use crate::config::Vocabulary;
use crate::field;
use vitae_domain::Document;

/// Language of the summary text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Portuguese summary (the default)
    #[default]
    Portuguese,
    /// English summary
    English,
}

impl Language {
    /// Pick a language from a code
    ///
    /// Only `"en"` (any case) selects English. Every other code, known or not,
    /// falls back to Portuguese.
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("en") {
            Language::English
        } else {
            Language::Portuguese
        }
    }

    /// Get the language code
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

/// Extract the summary text in the given language
///
/// Returns `None` when the summary element, any of its ancestors, or the
/// attribute for that language is absent. A present but empty attribute is
/// returned as an empty string.
pub fn extract(document: &Document, language: Language, vocabulary: &Vocabulary) -> Option<String> {
    let attribute = match language {
        Language::Portuguese => &vocabulary.summary_text,
        Language::English => &vocabulary.summary_text_en,
    };
    let summary = document
        .get(&vocabulary.general_data)?
        .get(&vocabulary.summary_cv);

    field::lookup(summary, attribute).map(|text| text.into_owned())
}
