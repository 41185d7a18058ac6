mod entry;
pub use self::entry::{ClassifyError, LexicalEntry, StoredWord, WordClass};

pub mod inflection;
pub use self::inflection::{conjugate, ConjugateError, ConjugationTable, FormPair, Surface};
