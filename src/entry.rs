//! Lexical entries and the stored-record boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error raised when a stored record cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClassifyError {
    /// A word type outside of adjective, verb, and noun.
    #[error("Unsupported word class `{word_type}`")]
    UnsupportedWordClass { word_type: String },
    /// A word type which requires a subtype, with the subtype absent or
    /// not one of its valid values.
    #[error("Word class `{word_type}` requires a valid subtype")]
    MissingSubtype { word_type: String },
}

/// The closed set of conjugable word classes.
///
/// The collaborator's word type / subtype split collapses into a single
/// tag, so the conjugation engine dispatches exhaustively with no fallback
/// branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordClass {
    VerbGodan,
    VerbIchidan,
    VerbIrregular,
    AdjectiveI,
    AdjectiveNa,
    Noun,
}

impl WordClass {
    /// Classify the word type / subtype pair exposed by a stored record.
    pub fn from_stored(word_type: &str, sub_type: Option<&str>) -> Result<Self, ClassifyError> {
        match word_type {
            "verb" => match sub_type {
                Some("godan") => Ok(WordClass::VerbGodan),
                Some("ichidan") => Ok(WordClass::VerbIchidan),
                Some("irregular") => Ok(WordClass::VerbIrregular),
                _ => Err(ClassifyError::MissingSubtype {
                    word_type: word_type.to_owned(),
                }),
            },
            "adjective" => match sub_type {
                Some("i-adjective") => Ok(WordClass::AdjectiveI),
                Some("na-adjective") => Ok(WordClass::AdjectiveNa),
                _ => Err(ClassifyError::MissingSubtype {
                    word_type: word_type.to_owned(),
                }),
            },
            "noun" => Ok(WordClass::Noun),
            _ => Err(ClassifyError::UnsupportedWordClass {
                word_type: word_type.to_owned(),
            }),
        }
    }
}

/// A dictionary entry in the shape the conjugation engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalEntry<'a> {
    /// Dictionary form.
    pub word: &'a str,
    /// Kana reading of the dictionary form.
    pub reading: &'a str,
    /// Word class, including the subtype where one applies.
    pub class: WordClass,
}

impl<'a> LexicalEntry<'a> {
    pub const fn new(word: &'a str, reading: &'a str, class: WordClass) -> Self {
        Self {
            word,
            reading,
            class,
        }
    }
}

/// A vocabulary record in the shape the persistence collaborator stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWord {
    pub word: String,
    pub reading: String,
    pub meaning: String,
    pub word_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,
}

impl StoredWord {
    /// Classify the record and borrow it as a lexical entry.
    pub fn entry(&self) -> Result<LexicalEntry<'_>, ClassifyError> {
        let class = WordClass::from_stored(&self.word_type, self.sub_type.as_deref())?;
        Ok(LexicalEntry::new(&self.word, &self.reading, class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_verbs() {
        assert_eq!(
            WordClass::from_stored("verb", Some("godan")),
            Ok(WordClass::VerbGodan)
        );
        assert_eq!(
            WordClass::from_stored("verb", Some("ichidan")),
            Ok(WordClass::VerbIchidan)
        );
        assert_eq!(
            WordClass::from_stored("verb", Some("irregular")),
            Ok(WordClass::VerbIrregular)
        );
    }

    #[test]
    fn classify_adjectives_and_nouns() {
        assert_eq!(
            WordClass::from_stored("adjective", Some("i-adjective")),
            Ok(WordClass::AdjectiveI)
        );
        assert_eq!(
            WordClass::from_stored("adjective", Some("na-adjective")),
            Ok(WordClass::AdjectiveNa)
        );
        assert_eq!(WordClass::from_stored("noun", None), Ok(WordClass::Noun));
    }

    #[test]
    fn missing_subtype() {
        assert_eq!(
            WordClass::from_stored("verb", None),
            Err(ClassifyError::MissingSubtype {
                word_type: "verb".to_owned()
            })
        );
        assert_eq!(
            WordClass::from_stored("adjective", Some("quadrigrade")),
            Err(ClassifyError::MissingSubtype {
                word_type: "adjective".to_owned()
            })
        );
    }

    #[test]
    fn unsupported_word_class() {
        assert_eq!(
            WordClass::from_stored("adverb", None),
            Err(ClassifyError::UnsupportedWordClass {
                word_type: "adverb".to_owned()
            })
        );
    }

    #[test]
    fn stored_record() {
        let record: StoredWord = serde_json::from_str(
            r#"{"word":"高い","reading":"たかい","meaning":"high","wordType":"adjective","subType":"i-adjective"}"#,
        )
        .unwrap();

        let entry = record.entry().unwrap();
        assert_eq!(entry.word, "高い");
        assert_eq!(entry.reading, "たかい");
        assert_eq!(entry.class, WordClass::AdjectiveI);
    }

    #[test]
    fn stored_record_without_subtype() {
        let record: StoredWord = serde_json::from_str(
            r#"{"word":"学生","reading":"がくせい","meaning":"student","wordType":"noun"}"#,
        )
        .unwrap();

        assert_eq!(record.entry().unwrap().class, WordClass::Noun);

        let record: StoredWord = serde_json::from_str(
            r#"{"word":"学生","reading":"がくせい","meaning":"student","wordType":"verb","subType":null}"#,
        )
        .unwrap();

        assert!(record.entry().is_err());
    }
}
