// Case type detection and conversion for surface forms.

use std::fmt;

use crate::character::{
    capitalize, is_apostrophe, is_lower, is_upper, to_turkish_lower, to_turkish_upper,
};

/// Casing policy of a formatted word, or the casing pattern guessed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// Keep the casing the analysis carries: "Aydın'da", "kitabımızsa".
    DefaultCase,
    /// "aydın'da"
    LowerCase,
    /// "AYDIN'DA"
    UpperCase,
    /// "Aydın'da", "Şiirde"
    TitleCase,
    /// Root upper case, suffixes lower case: "AYDIN'da", "KIŞçığa".
    UpperCaseRootLowerCaseEnding,
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseType::DefaultCase => "DEFAULT_CASE",
            CaseType::LowerCase => "LOWER_CASE",
            CaseType::UpperCase => "UPPER_CASE",
            CaseType::TitleCase => "TITLE_CASE",
            CaseType::UpperCaseRootLowerCaseEnding => "UPPER_CASE_ROOT_LOWER_CASE_ENDING",
        };
        f.write_str(name)
    }
}

/// Guess the case pattern of an arbitrary, already formatted string.
///
/// Only cased letters are inspected; digits and punctuation (including the
/// apostrophe) are ignored.
///
/// - no cased letters → `DefaultCase`
/// - all lowercase → `LowerCase`
/// - all uppercase (a single uppercase letter included) → `UpperCase`
/// - one uppercase letter followed by lowercase letters → `TitleCase`
/// - an uppercase run of two or more letters followed by lowercase letters
///   only → `UpperCaseRootLowerCaseEnding`
/// - anything else (e.g. "aBc") → `UpperCase`
pub fn guess_case(text: &str) -> CaseType {
    let letters: Vec<char> = text.chars().filter(|&c| is_upper(c) || is_lower(c)).collect();
    if letters.is_empty() {
        return CaseType::DefaultCase;
    }

    let upper_count = letters.iter().filter(|&&c| is_upper(c)).count();
    if upper_count == 0 {
        return CaseType::LowerCase;
    }
    if upper_count == letters.len() {
        return CaseType::UpperCase;
    }

    let upper_run = letters.iter().take_while(|&&c| is_upper(c)).count();
    let tail_lower = letters[upper_run..].iter().all(|&c| is_lower(c));
    match (upper_run, tail_lower) {
        (1, true) => CaseType::TitleCase,
        (n, true) if n >= 2 => CaseType::UpperCaseRootLowerCaseEnding,
        _ => CaseType::UpperCase,
    }
}

/// Apply a case policy to a plain string.
///
/// `UpperCaseRootLowerCaseEnding` treats the text before the first apostrophe
/// as the root; without an apostrophe the whole string is the root.
pub fn set_case(text: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::DefaultCase => text.to_string(),
        CaseType::LowerCase => to_turkish_lower(text),
        CaseType::UpperCase => to_turkish_upper(text),
        CaseType::TitleCase => capitalize(text),
        CaseType::UpperCaseRootLowerCaseEnding => match text.find(is_apostrophe) {
            Some(idx) => {
                let (root, ending) = text.split_at(idx);
                format!("{}{}", to_turkish_upper(root), to_turkish_lower(ending))
            }
            None => to_turkish_upper(text),
        },
    }
}
