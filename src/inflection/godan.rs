#![allow(unused)]

//! Static sound-change data for godan verbs.

/// The five-step conjugation row of one godan consonant class.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Row {
    pub(super) a: &'static str,
    pub(super) i: &'static str,
    pub(super) u: &'static str,
    pub(super) e: &'static str,
    pub(super) o: &'static str,
}

/// The U row.
pub(super) static U: &Row = &Row {
    a: "わ",
    i: "い",
    u: "う",
    e: "え",
    o: "お",
};

/// The KU row.
pub(super) static KU: &Row = &Row {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
};

/// The GU row.
pub(super) static GU: &Row = &Row {
    a: "が",
    i: "ぎ",
    u: "ぐ",
    e: "げ",
    o: "ご",
};

/// The SU row.
pub(super) static SU: &Row = &Row {
    a: "さ",
    i: "し",
    u: "す",
    e: "せ",
    o: "そ",
};

/// The TSU row.
pub(super) static TSU: &Row = &Row {
    a: "た",
    i: "ち",
    u: "つ",
    e: "て",
    o: "と",
};

/// The NU row.
pub(super) static NU: &Row = &Row {
    a: "な",
    i: "に",
    u: "ぬ",
    e: "ね",
    o: "の",
};

/// The BU row.
pub(super) static BU: &Row = &Row {
    a: "ば",
    i: "び",
    u: "ぶ",
    e: "べ",
    o: "ぼ",
};

/// The MU row.
pub(super) static MU: &Row = &Row {
    a: "ま",
    i: "み",
    u: "む",
    e: "め",
    o: "も",
};

/// The RU row.
pub(super) static RU: &Row = &Row {
    a: "ら",
    i: "り",
    u: "る",
    e: "れ",
    o: "ろ",
};

/// Look up the conjugation row for the terminal mora of a dictionary form.
pub(crate) fn row(terminal: char) -> Option<&'static Row> {
    match terminal {
        'う' => Some(U),
        'く' => Some(KU),
        'ぐ' => Some(GU),
        'す' => Some(SU),
        'つ' => Some(TSU),
        'ぬ' => Some(NU),
        'ぶ' => Some(BU),
        'む' => Some(MU),
        'る' => Some(RU),
        _ => None,
    }
}

/// A euphonic alternation applied to the past stem.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Euphony {
    /// Mora replacing the terminal in the past stem.
    pub(super) stem: &'static str,
    /// Whether the past auxiliary voices to だ.
    pub(super) voiced: bool,
}

/// Look up the euphonic alternation for a terminal mora, if one applies.
///
/// Terminals outside this set derive their past stem from the regular
/// e-step of their row.
pub(crate) fn euphony(terminal: char) -> Option<Euphony> {
    match terminal {
        'つ' | 'る' => Some(Euphony {
            stem: "っ",
            voiced: false,
        }),
        'ぶ' | 'む' | 'ぬ' => Some(Euphony {
            stem: "ん",
            voiced: true,
        }),
        'く' => Some(Euphony {
            stem: "い",
            voiced: false,
        }),
        'ぐ' => Some(Euphony {
            stem: "い",
            voiced: true,
        }),
        _ => None,
    }
}

#[test]
fn euphony_voicing() {
    for terminal in ['ぶ', 'む', 'ぬ', 'ぐ'] {
        assert!(euphony(terminal).is_some_and(|e| e.voiced), "{terminal}");
    }

    for terminal in ['う', 'く', 'す', 'つ', 'る'] {
        assert!(!euphony(terminal).is_some_and(|e| e.voiced), "{terminal}");
    }
}

#[test]
fn every_euphonic_terminal_has_a_row() {
    for terminal in ['う', 'く', 'ぐ', 'す', 'つ', 'ぬ', 'ぶ', 'む', 'る'] {
        assert!(row(terminal).is_some(), "{terminal}");
    }
}
