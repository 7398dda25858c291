// Word analysis: root lookup plus a depth-first walk of the suffix graph.
//
// For every prefix of the (lowercased) input that is a known stem surface,
// the rest of the input is consumed morpheme by morpheme. Each walk that
// ends in a terminal state with nothing left over is one analysis.

use std::sync::Arc;

use log::{debug, trace};

use kelime_core::analysis::{Morpheme, MorphemeData, SingleAnalysis, WordAnalysis};
use kelime_core::character::{is_apostrophe, to_turkish_lower};
use kelime_core::dictionary::{DictionaryItem, RootLexicon};
use kelime_core::enums::{
    AttributeSet, MAX_WORD_CHARS, PrimaryPos, RootAttribute, SecondaryPos,
};

use crate::morphotactics::stems::{StemIndex, StemTransition};
use crate::morphotactics::{StateId, SuffixGraph};
use crate::numeral::{leading_number, read_number};
use crate::phonology::{Expect, PhoneticContext, allomorphs};

/// Upper bound on morphemes in one analysis.
const MAX_WALK_DEPTH: usize = 48;

/// Trait for morphological analyzers.
pub trait Analyzer {
    /// Analyze one token. An empty result means the token is not analyzable.
    fn analyze(&self, word: &str) -> WordAnalysis;
}

/// Analyzer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Analyses returned per token at most.
    pub max_analysis_count: usize,
    /// Analyze digit tokens (`4'ten`, `12,5`) with runtime numeral items.
    pub analyze_numerals: bool,
    /// Accept one apostrophe inside a token and treat it as the root boundary.
    /// When false, tokens containing an apostrophe are not analyzed.
    pub accept_apostrophe: bool,
    /// Longer tokens are not analyzed.
    pub max_word_chars: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_analysis_count: 100,
            analyze_numerals: true,
            accept_apostrophe: true,
            max_word_chars: MAX_WORD_CHARS,
        }
    }
}

/// Turkish analyzer over a stem index and the suffix graph.
#[derive(Debug, Clone)]
pub struct TurkishAnalyzer {
    graph: SuffixGraph,
    stems: StemIndex,
    options: AnalyzerOptions,
}

impl TurkishAnalyzer {
    pub fn new(lexicon: &RootLexicon, options: AnalyzerOptions) -> Self {
        let graph = SuffixGraph::turkish();
        let stems = StemIndex::from_lexicon(lexicon);
        debug!(
            "built analyzer: {} stems, {} suffix edges",
            stems.len(),
            graph.edge_count()
        );
        Self {
            graph,
            stems,
            options,
        }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn stems(&self) -> &StemIndex {
        &self.stems
    }

    pub fn graph(&self) -> &SuffixGraph {
        &self.graph
    }

    /// Remove an interior apostrophe, returning the joined word and the byte
    /// offset the apostrophe stood at. `None` rejects the token.
    fn split_apostrophe(&self, word: &str) -> Option<(String, Option<usize>)> {
        let positions: Vec<usize> = word
            .char_indices()
            .filter(|(_, c)| is_apostrophe(*c))
            .map(|(i, _)| i)
            .collect();
        match positions.as_slice() {
            [] => Some((word.to_string(), None)),
            [pos] if self.options.accept_apostrophe => {
                let (root, quoted) = word.split_at(*pos);
                let ending: String = quoted.chars().skip(1).collect();
                if root.is_empty() || ending.is_empty() {
                    return None;
                }
                Some((format!("{root}{ending}"), Some(root.len())))
            }
            _ => None,
        }
    }

    /// Walk the suffix graph from a stem over `rest`.
    fn walk(&self, stem: &StemTransition, rest: &str, limit: usize, out: &mut Vec<SingleAnalysis>) {
        let mut walker = Walker {
            graph: &self.graph,
            stem,
            limit,
            morphemes: Vec::new(),
            out,
        };
        walker.visit(stem.state, stem.context, stem.expect, rest, 0);
    }

    fn analyze_root(&self, word: &str, root_end: usize, out: &mut Vec<SingleAnalysis>) {
        let (prefix, rest) = word.split_at(root_end);
        for stem in self.stems.get(prefix) {
            self.walk(stem, rest, self.options.max_analysis_count, out);
        }
    }

    /// Digit tokens. Integers become a runtime cardinal root; a number with
    /// a decimal part is one literal token and its suffixes are only
    /// validated. `written` is the token as given, apostrophe removed.
    fn analyze_numeral(
        &self,
        written: &str,
        word: &str,
        boundary: Option<usize>,
        out: &mut Vec<SingleAnalysis>,
    ) {
        let Some(number) = leading_number(word) else {
            return;
        };
        let number_end = number.text.len();
        if boundary.is_some_and(|b| b != number_end) {
            return;
        }
        let Some(reading) = read_number(number.text) else {
            return;
        };
        let rest = &word[number_end..];
        let attributes: AttributeSet = [RootAttribute::Runtime].into_iter().collect();

        if number.decimal {
            let reading_stem = runtime_numeral(number.text, &reading, SecondaryPos::RealNumber, attributes);
            let mut found = Vec::new();
            self.walk(&reading_stem, rest, 1, &mut found);
            if rest.is_empty() || !found.is_empty() {
                let literal = DictionaryItem::new(
                    written,
                    written,
                    reading,
                    PrimaryPos::Numeral,
                    SecondaryPos::RealNumber,
                    attributes,
                );
                out.push(SingleAnalysis::new(Arc::new(literal), written, Vec::new()));
            }
        } else {
            let stem = runtime_numeral(number.text, &reading, SecondaryPos::Cardinal, attributes);
            self.walk(&stem, rest, self.options.max_analysis_count, out);
        }
    }
}

fn runtime_numeral(
    text: &str,
    reading: &str,
    secondary: SecondaryPos,
    attributes: AttributeSet,
) -> StemTransition {
    let item = DictionaryItem::new(
        text,
        text,
        reading,
        PrimaryPos::Numeral,
        secondary,
        attributes,
    );
    StemTransition::runtime(Arc::new(item), text.to_string())
}

impl Analyzer for TurkishAnalyzer {
    fn analyze(&self, word: &str) -> WordAnalysis {
        let lowered = to_turkish_lower(word);
        let char_count = lowered.chars().count();
        if char_count == 0 || char_count > self.options.max_word_chars {
            return WordAnalysis::new(word, lowered, Vec::new());
        }
        let Some((normalized, boundary)) = self.split_apostrophe(&lowered) else {
            trace!("`{word}`: rejected apostrophe placement");
            return WordAnalysis::new(word, lowered, Vec::new());
        };

        let mut out = Vec::new();
        if self.options.analyze_numerals {
            let written: String = word.chars().filter(|&c| !is_apostrophe(c)).collect();
            self.analyze_numeral(&written, &normalized, boundary, &mut out);
        }
        match boundary {
            Some(root_end) => self.analyze_root(&normalized, root_end, &mut out),
            None => {
                let ends: Vec<usize> = normalized
                    .char_indices()
                    .skip(1)
                    .map(|(i, _)| i)
                    .chain(std::iter::once(normalized.len()))
                    .collect();
                for end in ends {
                    self.analyze_root(&normalized, end, &mut out);
                }
            }
        }
        out.truncate(self.options.max_analysis_count);
        trace!("`{word}`: {} analyses", out.len());
        WordAnalysis::new(word, normalized, out)
    }
}

/// Depth-first search state for one stem.
struct Walker<'a> {
    graph: &'a SuffixGraph,
    stem: &'a StemTransition,
    limit: usize,
    morphemes: Vec<MorphemeData>,
    out: &'a mut Vec<SingleAnalysis>,
}

impl Walker<'_> {
    fn visit(
        &mut self,
        state: StateId,
        ctx: PhoneticContext,
        expect: Expect,
        rest: &str,
        depth: usize,
    ) {
        if self.out.len() >= self.limit {
            return;
        }
        if rest.is_empty() && state.is_terminal() && expect.admits_end() {
            self.out.push(SingleAnalysis::new(
                Arc::clone(&self.stem.item),
                self.stem.surface.clone(),
                self.morphemes.clone(),
            ));
        }
        if depth >= MAX_WALK_DEPTH {
            return;
        }

        let graph = self.graph;
        for edge in graph.edges(state) {
            if expect == Expect::Progressive && edge.morpheme != Morpheme::Prog {
                continue;
            }
            if !edge.condition.holds(&ctx) {
                continue;
            }
            for allomorph in allomorphs(&edge.template, &ctx) {
                let Some(remaining) = rest.strip_prefix(allomorph.surface.as_str()) else {
                    continue;
                };
                let (next_ctx, next_expect) = if allomorph.surface.is_empty() {
                    (ctx, edge.then.unwrap_or(expect))
                } else if expect.admits(&allomorph.surface) {
                    (
                        ctx.extended(&allomorph.surface),
                        edge.then.unwrap_or(allomorph.next),
                    )
                } else {
                    continue;
                };
                self.morphemes
                    .push(MorphemeData::new(edge.morpheme, allomorph.surface));
                self.visit(edge.target, next_ctx, next_expect, remaining, depth + 1);
                self.morphemes.pop();
            }
        }
    }
}
