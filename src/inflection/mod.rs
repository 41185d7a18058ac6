
mod godan;

pub use self::conjugate::conjugate;
mod conjugate;

use core::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error raised when an entry cannot be conjugated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConjugateError {
    /// The dictionary form was empty.
    #[error("Cannot conjugate an empty word")]
    EmptyWord,
    /// A word classified as irregular which is neither する, a する
    /// compound, nor 来る.
    #[error("`{word}` is not a recognized irregular verb")]
    UnsupportedIrregularForm { word: String },
    /// A godan terminal mora with no row in the sound-change table.
    #[error("No sound-change row for terminal mora `{mora}`")]
    UnknownTerminalMora { mora: char },
}

/// The surface forms filling one slot of a conjugation table.
///
/// Most slots hold exactly one rendering. Where the language allows two
/// equally valid renderings, such as 〜ではない and 〜じゃない, both are
/// kept in order of preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Surface {
    forms: ArrayVec<String, 2>,
}

impl Surface {
    pub(crate) fn one(form: String) -> Self {
        let mut forms = ArrayVec::new();
        forms.push(form);
        Self { forms }
    }

    pub(crate) fn pair(primary: String, alternate: String) -> Self {
        let mut forms = ArrayVec::new();
        forms.push(primary);
        forms.push(alternate);
        Self { forms }
    }

    /// The preferred rendering.
    pub fn primary(&self) -> &str {
        self.forms.first().map(String::as_str).unwrap_or_default()
    }

    /// All valid renderings, in order of preference.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }

    /// Test if the given rendering is one of the valid forms.
    pub fn contains(&self, form: &str) -> bool {
        self.forms.iter().any(|f| f == form)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.forms.iter();

        if let Some(form) = it.next() {
            form.fmt(f)?;
        }

        for form in it {
            write!(f, " / {form}")?;
        }

        Ok(())
    }
}

/// The plain and polite renderings of one grammatical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPair {
    pub plain: Surface,
    pub polite: Surface,
}

impl FormPair {
    pub(crate) fn new(plain: Surface, polite: Surface) -> Self {
        Self { plain, polite }
    }
}

/// The table of grammatical forms derived from one dictionary form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConjugationTable {
    pub present: FormPair,
    pub negative: FormPair,
    pub past: FormPair,
    pub past_negative: FormPair,
}

impl ConjugationTable {
    /// Iterate over the four slots together with their labels.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &FormPair)> {
        [
            ("present", &self.present),
            ("negative", &self.negative),
            ("past", &self.past),
            ("past negative", &self.past_negative),
        ]
        .into_iter()
    }
}
