//! Turkish morphological analysis and surface realization.
//!
//! ```text
//! let morphology = TurkishMorphology::from_lines(["elma", "Iphone [Pr:ayfon]"])?;
//! for analysis in &morphology.analyze("ıphonumun") {
//!     morphology.format(analysis, "'"); // "Iphone'umun"
//! }
//! ```

pub mod analyzer;
pub mod formatter;
pub mod handle;
pub mod morphotactics;
pub mod numeral;
pub mod phonology;

pub use analyzer::{Analyzer, AnalyzerOptions, TurkishAnalyzer};
pub use formatter::SurfaceFormatter;
pub use handle::{MorphologyError, TurkishMorphology, TurkishMorphologyBuilder};
pub use kelime_core::analysis::{Morpheme, MorphemeData, SingleAnalysis, WordAnalysis};
pub use kelime_core::case::CaseType;
pub use kelime_core::dictionary::{DictionaryItem, LexiconError, RootLexicon};
