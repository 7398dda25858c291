// Surface realization of analyses.
//
// The realizer splits a word into two segments, the root literal and the
// ending (all suffix surfaces), and applies apostrophe and case policy to
// each. It is total over analyses produced by the paired analyzer; feeding
// it an analysis built against another lexicon is a caller error.

use kelime_core::analysis::SingleAnalysis;
use kelime_core::case::{CaseType, guess_case, set_case};
use kelime_core::character::{to_turkish_lower, to_turkish_upper};
use kelime_core::dictionary::DictionaryItem;
use kelime_core::enums::{PrimaryPos, RootAttribute, SecondaryPos};

/// Formats analyses back to text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceFormatter;

impl SurfaceFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Realize an analysis with the casing it carries.
    pub fn format(&self, analysis: &SingleAnalysis, quote: &str) -> String {
        self.format_to_case(analysis, CaseType::DefaultCase, quote)
    }

    /// Realize an analysis under a case policy.
    pub fn format_to_case(&self, analysis: &SingleAnalysis, case_type: CaseType, quote: &str) -> String {
        let item = analysis.dictionary_item();
        let root = root_literal(analysis);
        let ending = analysis.ending();
        let separator = if apostrophe_required(item) && !ending.is_empty() {
            quote
        } else {
            ""
        };

        match case_type {
            // No quote is needed to find the boundary: KIŞçığa.
            CaseType::UpperCaseRootLowerCaseEnding => format!(
                "{}{separator}{}",
                to_turkish_upper(root),
                to_turkish_lower(&ending)
            ),
            CaseType::DefaultCase
            | CaseType::LowerCase
            | CaseType::UpperCase
            | CaseType::TitleCase => set_case(&format!("{root}{separator}{ending}"), case_type),
        }
    }

    /// Guess the case policy a piece of text was written in.
    pub fn guess_case(&self, text: &str) -> CaseType {
        guess_case(text)
    }
}

/// Whether an apostrophe separates the root from its suffixes.
pub fn apostrophe_required(item: &DictionaryItem) -> bool {
    match (item.primary_pos(), item.secondary_pos()) {
        (_, SecondaryPos::ProperNoun) => !item.has_attribute(RootAttribute::NoQuote),
        (PrimaryPos::Numeral, _) => is_digit_literal(item.root()),
        _ => false,
    }
}

/// Digits, optionally in `.` thousands groups. A decimal part makes the
/// number a literal.
fn is_digit_literal(root: &str) -> bool {
    root.starts_with(|c: char| c.is_ascii_digit())
        && root.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// The written root segment.
///
/// Quoted roots, `NoQuote` roots and roots with a pronunciation override are
/// written as stored in the lexicon. Other roots keep the shape they took in
/// the input (`kitab` in `kitabı`).
fn root_literal(analysis: &SingleAnalysis) -> &str {
    let item = analysis.dictionary_item();
    if apostrophe_required(item)
        || item.has_attribute(RootAttribute::NoQuote)
        || item.has_pronunciation_override()
    {
        item.root()
    } else {
        analysis.stem()
    }
}
