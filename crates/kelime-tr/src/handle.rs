// TurkishMorphology: top-level integration point.
//
// Owns the root lexicon, the analyzer (suffix graph + stem index) and the
// surface formatter. Everything is built once by the builder and is
// read-only afterwards, so one instance can be shared across threads.

use kelime_core::analysis::{SingleAnalysis, WordAnalysis};
use kelime_core::case::CaseType;
use kelime_core::dictionary::{DictionaryItem, LexiconError, RootLexicon};

use crate::analyzer::{Analyzer, AnalyzerOptions, TurkishAnalyzer};
use crate::formatter::SurfaceFormatter;

/// Error type for `TurkishMorphology` construction failures.
#[derive(Debug, thiserror::Error)]
pub enum MorphologyError {
    /// An entry definition could not be parsed.
    #[error("invalid lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Lexicon, analyzer and formatter bundle.
#[derive(Debug, Clone)]
pub struct TurkishMorphology {
    lexicon: RootLexicon,
    analyzer: TurkishAnalyzer,
    formatter: SurfaceFormatter,
}

impl TurkishMorphology {
    pub fn builder() -> TurkishMorphologyBuilder {
        TurkishMorphologyBuilder::default()
    }

    /// Build from entry-definition lines with default options.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MorphologyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::builder().lexicon_lines(lines).build()
    }

    pub fn lexicon(&self) -> &RootLexicon {
        &self.lexicon
    }

    pub fn analyzer(&self) -> &TurkishAnalyzer {
        &self.analyzer
    }

    /// All analyses of a token.
    pub fn analyze(&self, word: &str) -> WordAnalysis {
        self.analyzer.analyze(word)
    }

    pub fn format(&self, analysis: &SingleAnalysis, quote: &str) -> String {
        self.formatter.format(analysis, quote)
    }

    pub fn format_to_case(&self, analysis: &SingleAnalysis, case_type: CaseType, quote: &str) -> String {
        self.formatter.format_to_case(analysis, case_type, quote)
    }

    pub fn guess_case(&self, text: &str) -> CaseType {
        self.formatter.guess_case(text)
    }
}

/// Collects lexicon content and options for a `TurkishMorphology`.
#[derive(Debug, Default)]
pub struct TurkishMorphologyBuilder {
    lines: Vec<String>,
    items: Vec<DictionaryItem>,
    options: AnalyzerOptions,
}

impl TurkishMorphologyBuilder {
    /// Add entry-definition lines. They are parsed in `build`.
    pub fn lexicon_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines
            .extend(lines.into_iter().map(|l| l.as_ref().to_string()));
        self
    }

    /// Add an already constructed item.
    pub fn add_item(mut self, item: DictionaryItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse the lexicon and build the analyzer. Fails on the first
    /// malformed entry definition.
    pub fn build(self) -> Result<TurkishMorphology, MorphologyError> {
        let mut lexicon = RootLexicon::from_lines(&self.lines)?;
        for item in self.items {
            lexicon.add(item);
        }
        let analyzer = TurkishAnalyzer::new(&lexicon, self.options);
        Ok(TurkishMorphology {
            lexicon,
            analyzer,
            formatter: SurfaceFormatter::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kelime_core::enums::{AttributeSet, PrimaryPos, SecondaryPos};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn morphology_is_send_and_sync() {
        assert_send_sync::<TurkishMorphology>();
        assert_send_sync::<WordAnalysis>();
    }

    #[test]
    fn builder_collects_lines_and_items() {
        let item = DictionaryItem::new(
            "armut",
            "armut",
            "",
            PrimaryPos::Noun,
            SecondaryPos::None,
            AttributeSet::new(),
        );
        let morphology = TurkishMorphology::builder()
            .lexicon_lines(["elma", "kitap"])
            .add_item(item)
            .build()
            .unwrap();
        assert_eq!(morphology.lexicon().len(), 3);
        assert_eq!(morphology.analyze("armuta").len(), 1);
    }

    #[test]
    fn malformed_line_fails_build() {
        let err = TurkishMorphology::from_lines(["elma", "Blah [A:Quote]"]).unwrap_err();
        assert!(matches!(
            err,
            MorphologyError::Lexicon(LexiconError::UnknownAttribute { .. })
        ));
        assert!(err.to_string().starts_with("invalid lexicon: unknown attribute"));
    }

    #[test]
    fn options_reach_the_analyzer() {
        let morphology = TurkishMorphology::builder()
            .lexicon_lines(["kitap"])
            .options(AnalyzerOptions {
                max_word_chars: 4,
                ..AnalyzerOptions::default()
            })
            .build()
            .unwrap();
        assert!(morphology.analyze("kitaplar").is_empty());
        assert_eq!(morphology.analyzer().options().max_word_chars, 4);
    }

    #[test]
    fn shared_across_threads() {
        let morphology = std::sync::Arc::new(TurkishMorphology::from_lines(["elma"]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = std::sync::Arc::clone(&morphology);
                std::thread::spawn(move || m.analyze("elmaya").len())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 1);
        }
    }
}
