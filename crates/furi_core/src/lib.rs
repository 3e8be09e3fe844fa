//! furi core types and functions.

pub mod tsv;

use serde::{Deserialize, Deserializer, Serialize};

/// A single word with its reading and annotations.
///
/// Fields are free-form strings. Missing and `null` fields deserialize as empty strings,
/// the frontend doesn't validate what the backend sends.
/// Any other non-string value is still an error, which fails the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuriganaRecord {
    /// The written form.
    #[serde(deserialize_with = "string_or_null")]
    pub word: String,
    /// The reading of the word.
    #[serde(deserialize_with = "string_or_null")]
    pub furigana: String,
    #[serde(deserialize_with = "string_or_null")]
    pub meaning: String,
    #[serde(deserialize_with = "string_or_null")]
    pub note: String,
    /// Ruby markup for the word, displayed as-is.
    #[serde(deserialize_with = "string_or_null")]
    pub ruby: String,
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl FuriganaRecord {
    /// Column names in display and storage order.
    pub const HEADERS: [&'static str; 5] = ["word", "furigana", "meaning", "note", "ruby"];

    pub fn new(
        word: impl Into<String>,
        furigana: impl Into<String>,
        meaning: impl Into<String>,
        note: impl Into<String>,
        ruby: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            furigana: furigana.into(),
            meaning: meaning.into(),
            note: note.into(),
            ruby: ruby.into(),
        }
    }

    /// The field values in the same order as `HEADERS`.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.word,
            &self.furigana,
            &self.meaning,
            &self.note,
            &self.ruby,
        ]
    }
}
