// Morphological analysis results.
//
// A `SingleAnalysis` is one segmentation of a word: the dictionary item it
// roots in, the surface of the root segment, and the ordered morphemes with
// their resolved surface forms. A `WordAnalysis` holds every segmentation of
// one input token.

use std::fmt;
use std::sync::Arc;

use crate::dictionary::DictionaryItem;

/// Morpheme categories produced by the Turkish suffix graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Morpheme {
    // Number / person agreement
    A1sg,
    A2sg,
    A3sg,
    A1pl,
    A2pl,
    A3pl,
    // Possessives
    Pnon,
    P1sg,
    P2sg,
    P3sg,
    P1pl,
    P2pl,
    P3pl,
    // Cases
    Nom,
    Dat,
    Acc,
    Loc,
    Abl,
    Gen,
    Ins,
    Equ,
    // Nominal derivations
    Dim,
    With,
    Without,
    Ness,
    Rel,
    Zero,
    // Verbal
    Neg,
    Able,
    Past,
    Narr,
    Prog,
    Fut,
    Aor,
    Cond,
    Opt,
    Imp,
    Pres,
    Cop,
    Inf1,
    Inf2,
    PastPart,
    FutPart,
    PresPart,
    AfterDoingSo,
    ByDoingSo,
    When,
}

impl Morpheme {
    /// Short id used in analysis strings.
    pub fn id(self) -> &'static str {
        match self {
            Morpheme::A1sg => "A1sg",
            Morpheme::A2sg => "A2sg",
            Morpheme::A3sg => "A3sg",
            Morpheme::A1pl => "A1pl",
            Morpheme::A2pl => "A2pl",
            Morpheme::A3pl => "A3pl",
            Morpheme::Pnon => "Pnon",
            Morpheme::P1sg => "P1sg",
            Morpheme::P2sg => "P2sg",
            Morpheme::P3sg => "P3sg",
            Morpheme::P1pl => "P1pl",
            Morpheme::P2pl => "P2pl",
            Morpheme::P3pl => "P3pl",
            Morpheme::Nom => "Nom",
            Morpheme::Dat => "Dat",
            Morpheme::Acc => "Acc",
            Morpheme::Loc => "Loc",
            Morpheme::Abl => "Abl",
            Morpheme::Gen => "Gen",
            Morpheme::Ins => "Ins",
            Morpheme::Equ => "Equ",
            Morpheme::Dim => "Dim",
            Morpheme::With => "With",
            Morpheme::Without => "Without",
            Morpheme::Ness => "Ness",
            Morpheme::Rel => "Rel",
            Morpheme::Zero => "Zero",
            Morpheme::Neg => "Neg",
            Morpheme::Able => "Able",
            Morpheme::Past => "Past",
            Morpheme::Narr => "Narr",
            Morpheme::Prog => "Prog1",
            Morpheme::Fut => "Fut",
            Morpheme::Aor => "Aor",
            Morpheme::Cond => "Cond",
            Morpheme::Opt => "Opt",
            Morpheme::Imp => "Imp",
            Morpheme::Pres => "Pres",
            Morpheme::Cop => "Cop",
            Morpheme::Inf1 => "Inf1",
            Morpheme::Inf2 => "Inf2",
            Morpheme::PastPart => "PastPart",
            Morpheme::FutPart => "FutPart",
            Morpheme::PresPart => "PresPart",
            Morpheme::AfterDoingSo => "AfterDoingSo",
            Morpheme::ByDoingSo => "ByDoingSo",
            Morpheme::When => "When",
        }
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One morpheme occurrence with its phonologically resolved surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MorphemeData {
    pub morpheme: Morpheme,
    pub surface: String,
}

impl MorphemeData {
    pub fn new(morpheme: Morpheme, surface: impl Into<String>) -> Self {
        Self {
            morpheme,
            surface: surface.into(),
        }
    }
}

/// One segmentation of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleAnalysis {
    item: Arc<DictionaryItem>,
    stem: String,
    morphemes: Vec<MorphemeData>,
}

impl SingleAnalysis {
    pub fn new(item: Arc<DictionaryItem>, stem: impl Into<String>, morphemes: Vec<MorphemeData>) -> Self {
        Self {
            item,
            stem: stem.into(),
            morphemes,
        }
    }

    pub fn dictionary_item(&self) -> &DictionaryItem {
        &self.item
    }

    /// Shared handle to the dictionary item.
    pub fn item_arc(&self) -> &Arc<DictionaryItem> {
        &self.item
    }

    /// Surface of the root segment as it appeared in the (lowercased) input,
    /// e.g. `kitab` for `kitabımızsa`.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Morphemes in root-to-end order, including empty ones (A3sg, Pnon, Nom).
    pub fn morphemes(&self) -> &[MorphemeData] {
        &self.morphemes
    }

    /// Concatenated surface of all suffix morphemes.
    pub fn ending(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    /// Stem plus ending, without any formatting applied.
    pub fn surface(&self) -> String {
        let mut out = self.stem.clone();
        out.push_str(&self.ending());
        out
    }

    pub fn contains_morpheme(&self, morpheme: Morpheme) -> bool {
        self.morphemes.iter().any(|m| m.morpheme == morpheme)
    }
}

impl fmt::Display for SingleAnalysis {
    /// `[kitap:Noun] kitab+A3sg+ımız:P1pl+Nom+Zero+sa:Cond+A3sg`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {}",
            self.item.lemma(),
            self.item.primary_pos(),
            self.stem
        )?;
        for m in &self.morphemes {
            if m.surface.is_empty() {
                write!(f, "+{}", m.morpheme)?;
            } else {
                write!(f, "+{}:{}", m.surface, m.morpheme)?;
            }
        }
        Ok(())
    }
}

/// All analyses of one input token. Empty means "unanalyzable", which is a
/// normal result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordAnalysis {
    input: String,
    normalized: String,
    analyses: Vec<SingleAnalysis>,
}

impl WordAnalysis {
    pub fn new(
        input: impl Into<String>,
        normalized: impl Into<String>,
        analyses: Vec<SingleAnalysis>,
    ) -> Self {
        Self {
            input: input.into(),
            normalized: normalized.into(),
            analyses,
        }
    }

    /// The token as given by the caller.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The lowercased token the analyzer matched against.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn analyses(&self) -> &[SingleAnalysis] {
        &self.analyses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SingleAnalysis> {
        self.analyses.iter()
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordAnalysis {
    type Item = &'a SingleAnalysis;
    type IntoIter = std::slice::Iter<'a, SingleAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.analyses.iter()
    }
}

impl IntoIterator for WordAnalysis {
    type Item = SingleAnalysis;
    type IntoIter = std::vec::IntoIter<SingleAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.analyses.into_iter()
    }
}
