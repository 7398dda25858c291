//! Realizer scenarios: analyze a word, then format the analysis back.

use kelime_tr::{CaseType, SingleAnalysis, TurkishMorphology};

fn morphology(lines: &[&str]) -> TurkishMorphology {
    TurkishMorphology::from_lines(lines.iter().copied()).unwrap()
}

/// The single analysis of a word.
fn only_analysis(morphology: &TurkishMorphology, word: &str) -> SingleAnalysis {
    let analyses = morphology.analyze(word);
    assert_eq!(analyses.len(), 1, "{word}: {:?}", analyses.analyses());
    analyses.into_iter().next().unwrap()
}

#[test]
fn format_keeps_plain_words_unchanged() {
    let m = morphology(&["elma", "kitap", "demek", "evet"]);
    let a = only_analysis(&m, "elmamdaki");
    assert_eq!(m.format(&a, "'"), "elmamdaki");

    for word in [
        "elma",
        "kitab\u{0131}m\u{0131}zsa",
        "diyebilece\u{011F}imiz",
        "dedi",
        "evet",
    ] {
        let analyses = m.analyze(word);
        assert!(!analyses.is_empty(), "{word}");
        for a in &analyses {
            assert_eq!(m.format(a, "'"), word, "{a}");
        }
    }
    // Neither is a word of this lexicon: a dative followed by a locative,
    // and an unknown root.
    assert!(m.analyze("elmamadaki").is_empty());
    assert!(m.analyze("kitalar\u{0131}mdan").is_empty());
}

#[test]
fn format_with_pronunciation_override() {
    let m = morphology(&["Iphone [Pr:ayfon]"]);
    let a = only_analysis(&m, "\u{0131}phonumun");
    assert_eq!(m.format(&a, "'"), "Iphone'umun");
}

#[test]
fn format_no_quote_attribute() {
    let m = morphology(&["Blah [A:NoQuote]"]);
    let a = only_analysis(&m, "blaha");
    assert_eq!(m.format(&a, "'"), "Blaha");
}

#[test]
fn format_numerals() {
    let m = morphology(&[]);
    let decimal = only_analysis(&m, "12,5ten");
    assert_eq!(m.format(&decimal, "'"), "12,5ten");
    let integer = only_analysis(&m, "4ten");
    assert_eq!(m.format(&integer, "'"), "4'ten");
    let quoted = only_analysis(&m, "4'ten");
    assert_eq!(m.format(&quoted, "'"), "4'ten");
    let grouped = only_analysis(&m, "1.000'e");
    assert_eq!(m.format(&grouped, "\u{2019}"), "1.000\u{2019}e");
}

#[test]
fn decimal_numerals_never_take_a_quote() {
    let m = morphology(&[]);
    let quoted = only_analysis(&m, "12,5'ten");
    assert_eq!(m.format(&quoted, "\u{2019}"), "12,5ten");
    assert_eq!(m.format(&quoted, "'"), "12,5ten");
    let upper = only_analysis(&m, "12,5TEN");
    assert_eq!(m.format(&upper, "'"), "12,5TEN");
}

#[test]
fn format_to_case_matrix() {
    let m = morphology(&["Aydın"]);
    let a = only_analysis(&m, "ayd\u{0131}nda");
    let cases = [
        (CaseType::DefaultCase, "Ayd\u{0131}n'da"),
        (CaseType::LowerCase, "ayd\u{0131}n'da"),
        (CaseType::UpperCase, "AYDIN'DA"),
        (CaseType::TitleCase, "Ayd\u{0131}n'da"),
        (CaseType::UpperCaseRootLowerCaseEnding, "AYDIN'da"),
    ];
    for (case_type, expected) in cases {
        assert_eq!(m.format_to_case(&a, case_type, "'"), expected, "{case_type}");
    }
}

#[test]
fn guessed_case_matches_the_policy_that_produced_it() {
    let m = morphology(&["Aydın", "kitap"]);
    let proper = only_analysis(&m, "ayd\u{0131}nda");
    let common = only_analysis(&m, "kitaplar\u{0131}m\u{0131}zdan");
    for case_type in [
        CaseType::LowerCase,
        CaseType::UpperCase,
        CaseType::TitleCase,
        CaseType::UpperCaseRootLowerCaseEnding,
    ] {
        let formatted = m.format_to_case(&proper, case_type, "'");
        assert_eq!(m.guess_case(&formatted), case_type, "{formatted}");
    }
    for case_type in [CaseType::LowerCase, CaseType::UpperCase, CaseType::TitleCase] {
        let formatted = m.format_to_case(&common, case_type, "'");
        assert_eq!(m.guess_case(&formatted), case_type, "{formatted}");
    }
}

#[test]
fn guessed_case_without_an_ending() {
    // With no ending there is nothing lower case left to tell the hybrid
    // policy from upper case, and a digit root has no letter to title-case.
    let m = morphology(&["Google [Pr:gug\u{0131}l]", "k\u{0131}\u{015F}"]);
    let google = only_analysis(&m, "google");
    let kis = only_analysis(&m, "k\u{0131}\u{015F}");
    for (a, expected) in [(&google, "GOOGLE"), (&kis, "KI\u{015E}")] {
        let formatted = m.format_to_case(a, CaseType::UpperCaseRootLowerCaseEnding, "'");
        assert_eq!(formatted, expected);
        assert_eq!(m.guess_case(&formatted), CaseType::UpperCase);
    }

    let numeral = only_analysis(&m, "4ten");
    let formatted = m.format_to_case(&numeral, CaseType::TitleCase, "'");
    assert_eq!(formatted, "4'ten");
    assert_eq!(m.guess_case(&formatted), CaseType::LowerCase);
}

#[test]
fn guess_case_patterns() {
    let m = morphology(&[]);
    let cases = [
        ("abc", CaseType::LowerCase),
        ("a", CaseType::LowerCase),
        ("ABC", CaseType::UpperCase),
        ("A", CaseType::UpperCase),
        ("Abc", CaseType::TitleCase),
        ("Ab'c", CaseType::TitleCase),
        ("AB'c", CaseType::UpperCaseRootLowerCaseEnding),
        ("123", CaseType::DefaultCase),
        ("12'de", CaseType::LowerCase),
        ("aBc", CaseType::UpperCase),
    ];
    for (text, expected) in cases {
        assert_eq!(m.guess_case(text), expected, "{text}");
    }
}

#[test]
fn every_analysis_round_trips() {
    let m = morphology(&["kitap", "gelmek", "elma", "demek"]);
    for word in ["kitab\u{0131}m", "kitab\u{0131}", "gelece\u{011F}im", "diyecek", "elmalardan"] {
        let analyses = m.analyze(word);
        assert!(!analyses.is_empty(), "{word}");
        for a in &analyses {
            assert_eq!(m.format(a, "'"), word, "{a}");
        }
    }
}

#[test]
fn unanalyzable_word_is_empty_not_an_error() {
    let m = morphology(&["elma"]);
    assert!(m.analyze("qwxz").is_empty());
}
