//! Module which performs conjugation, based on a words class.

use crate::entry::{LexicalEntry, WordClass};
use crate::inflection::godan;
use crate::inflection::{ConjugateError, ConjugationTable, FormPair, Surface};

/// Derive the conjugation table for the given entry.
///
/// The table is a pure function of the entry, so repeated calls yield
/// identical tables and any number of calls may run concurrently.
pub fn conjugate(entry: &LexicalEntry<'_>) -> Result<ConjugationTable, ConjugateError> {
    if entry.word.is_empty() {
        return Err(ConjugateError::EmptyWord);
    }

    match entry.class {
        WordClass::VerbGodan => godan(entry.word),
        WordClass::VerbIchidan => ichidan(entry.word),
        WordClass::VerbIrregular => irregular(entry.word),
        WordClass::AdjectiveI => adjective_i(entry.word),
        WordClass::AdjectiveNa | WordClass::Noun => Ok(copula(entry.word)),
    }
}

fn godan(word: &str) -> Result<ConjugationTable, ConjugateError> {
    let (stem, terminal) = split_terminal(word).ok_or(ConjugateError::EmptyWord)?;

    let row = godan::row(terminal).ok_or(ConjugateError::UnknownTerminalMora { mora: terminal })?;

    let masu_stem = [stem, row.i].concat();
    let nai_stem = [stem, row.a].concat();

    let past = match godan::euphony(terminal) {
        Some(e) => {
            let aux = if e.voiced { "だ" } else { "た" };
            [stem, e.stem, aux].concat()
        }
        None => [stem, row.e, "た"].concat(),
    };

    Ok(verb_table(word.to_owned(), &masu_stem, &nai_stem, past))
}

fn ichidan(word: &str) -> Result<ConjugationTable, ConjugateError> {
    // The terminal is assumed to be る; classification is the caller's
    // contract.
    let (stem, _) = split_terminal(word).ok_or(ConjugateError::EmptyWord)?;

    Ok(verb_table(
        word.to_owned(),
        stem,
        stem,
        [stem, "た"].concat(),
    ))
}

fn irregular(word: &str) -> Result<ConjugationTable, ConjugateError> {
    if let Some(prefix) = word.strip_suffix("する") {
        let stem = [prefix, "し"].concat();
        return Ok(verb_table(
            word.to_owned(),
            &stem,
            &stem,
            [prefix, "した"].concat(),
        ));
    }

    // Either spelling is accepted; the table always renders the kanji form.
    if word == "来る" || word == "くる" {
        return Ok(verb_table("来る".to_owned(), "来", "来", "来た".to_owned()));
    }

    Err(ConjugateError::UnsupportedIrregularForm {
        word: word.to_owned(),
    })
}

fn adjective_i(word: &str) -> Result<ConjugationTable, ConjugateError> {
    // いい and よい inflect from the regular allomorph よ, while the
    // dictionary form is always rendered いい.
    if word == "いい" || word == "よい" {
        return Ok(adjective_i_table("いい".to_owned(), "よ"));
    }

    // The terminal is assumed to be い; classification is the caller's
    // contract.
    let (stem, _) = split_terminal(word).ok_or(ConjugateError::EmptyWord)?;

    Ok(adjective_i_table(word.to_owned(), stem))
}

fn adjective_i_table(dictionary: String, stem: &str) -> ConjugationTable {
    let polite_present = [dictionary.as_str(), "です"].concat();

    ConjugationTable {
        present: FormPair::new(Surface::one(dictionary), Surface::one(polite_present)),
        negative: FormPair::new(
            Surface::one([stem, "くない"].concat()),
            Surface::pair(
                [stem, "くないです"].concat(),
                [stem, "くありません"].concat(),
            ),
        ),
        past: FormPair::new(
            Surface::one([stem, "かった"].concat()),
            Surface::one([stem, "かったです"].concat()),
        ),
        past_negative: FormPair::new(
            Surface::one([stem, "くなかった"].concat()),
            Surface::pair(
                [stem, "くなかったです"].concat(),
                [stem, "くありませんでした"].concat(),
            ),
        ),
    }
}

/// Predicate inflection shared by na-adjectives and nouns. The word itself
/// never changes; the copula carries the whole paradigm.
fn copula(word: &str) -> ConjugationTable {
    ConjugationTable {
        present: FormPair::new(
            Surface::one([word, "だ"].concat()),
            Surface::one([word, "です"].concat()),
        ),
        negative: FormPair::new(
            Surface::pair([word, "ではない"].concat(), [word, "じゃない"].concat()),
            Surface::pair(
                [word, "ではありません"].concat(),
                [word, "じゃありません"].concat(),
            ),
        ),
        past: FormPair::new(
            Surface::one([word, "だった"].concat()),
            Surface::one([word, "でした"].concat()),
        ),
        past_negative: FormPair::new(
            Surface::pair(
                [word, "ではなかった"].concat(),
                [word, "じゃなかった"].concat(),
            ),
            Surface::pair(
                [word, "ではありませんでした"].concat(),
                [word, "じゃありませんでした"].concat(),
            ),
        ),
    }
}

/// The table shared by every verb paradigm: ます attaches to the polite
/// stem for all polite forms, ない and なかった to the negative stem for
/// the plain negatives, and only the plain past is supplied whole.
fn verb_table(
    dictionary: String,
    masu_stem: &str,
    nai_stem: &str,
    past: String,
) -> ConjugationTable {
    ConjugationTable {
        present: FormPair::new(
            Surface::one(dictionary),
            Surface::one([masu_stem, "ます"].concat()),
        ),
        negative: FormPair::new(
            Surface::one([nai_stem, "ない"].concat()),
            Surface::one([masu_stem, "ません"].concat()),
        ),
        past: FormPair::new(
            Surface::one(past),
            Surface::one([masu_stem, "ました"].concat()),
        ),
        past_negative: FormPair::new(
            Surface::one([nai_stem, "なかった"].concat()),
            Surface::one([masu_stem, "ませんでした"].concat()),
        ),
    }
}

fn split_terminal(word: &str) -> Option<(&str, char)> {
    let mut it = word.chars();
    let terminal = it.next_back()?;
    Some((it.as_str(), terminal))
}
