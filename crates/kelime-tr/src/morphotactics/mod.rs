// Turkish morphotactics: the suffix graph.
//
// States are morphotactic positions ("after a plural", "after a case");
// edges attach one morpheme, written as a phonology template, and lead to
// the next position. A word is accepted when the walk consumes the whole
// input in a terminal state.
//
// The graph is built once and never mutated; analyzers share it read-only.

pub mod stems;

use kelime_core::analysis::Morpheme;
use kelime_core::enums::PrimaryPos;

use crate::phonology::{Expect, PhoneticContext, Template};

/// A morphotactic position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    NounRoot,
    NumeralRoot,
    NounSg,
    NounPl,
    NounPoss,
    NounPossP3,
    NounCase,
    NounCaseLocGen,
    Rel,
    RelAgr,
    AdjRoot,
    NominalVerb,
    CopulaPres,
    CopA3sg,
    CopulaNarr,
    VerbRoot,
    VerbAble,
    VerbNeg,
    VerbNegProg,
    VerbTense,
    VerbPastAgr,
    OptAgr,
    ImpAgr,
    NegAorAgr,
    NegAorFirst,
    InfNoun,
    PartAgr,
    PartPoss,
    Done,
    Uninflected,
}

impl StateId {
    const COUNT: usize = StateId::Uninflected as usize + 1;

    fn index(self) -> usize {
        self as usize
    }

    /// A word may end in this state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StateId::NounCase
                | StateId::NounCaseLocGen
                | StateId::AdjRoot
                | StateId::Done
                | StateId::Uninflected
        )
    }

    /// Entry state for roots of a part of speech.
    pub fn root_for(pos: PrimaryPos) -> Self {
        match pos {
            PrimaryPos::Noun => StateId::NounRoot,
            PrimaryPos::Adjective => StateId::AdjRoot,
            PrimaryPos::Verb => StateId::VerbRoot,
            PrimaryPos::Numeral => StateId::NumeralRoot,
            PrimaryPos::Adverb
            | PrimaryPos::Conjunction
            | PrimaryPos::Interjection
            | PrimaryPos::Pronoun
            | PrimaryPos::Determiner
            | PrimaryPos::PostPositive
            | PrimaryPos::Question
            | PrimaryPos::Duplicator
            | PrimaryPos::Punctuation
            | PrimaryPos::Unknown => StateId::Uninflected,
        }
    }
}

/// Phonological precondition of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    AfterConsonant,
    /// Root takes the -Ar aorist.
    AoristA,
    /// Root takes the -Ir aorist.
    AoristI,
}

impl Condition {
    pub fn holds(self, ctx: &PhoneticContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::AfterConsonant => !ctx.ends_with_vowel(),
            Condition::AoristA => ctx.aorist_a,
            Condition::AoristI => !ctx.aorist_a,
        }
    }
}

/// One morpheme attachment.
#[derive(Debug, Clone)]
pub struct Edge {
    pub morpheme: Morpheme,
    pub template: Template,
    pub target: StateId,
    pub condition: Condition,
    /// Overrides the constraint on what follows this morpheme.
    pub then: Option<Expect>,
}

/// The Turkish suffix graph.
#[derive(Debug, Clone)]
pub struct SuffixGraph {
    edges: Vec<Vec<Edge>>,
}

impl Default for SuffixGraph {
    fn default() -> Self {
        Self::turkish()
    }
}

impl SuffixGraph {
    /// Outgoing edges of a state, in priority order.
    pub fn edges(&self, state: StateId) -> &[Edge] {
        &self.edges[state.index()]
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Build the graph.
    pub fn turkish() -> Self {
        let mut b = GraphBuilder::new();
        b.nominal();
        b.copula();
        b.verbal();
        b.finish()
    }
}

struct GraphBuilder {
    edges: Vec<Vec<Edge>>,
}

impl GraphBuilder {
    fn new() -> Self {
        Self {
            edges: vec![Vec::new(); StateId::COUNT],
        }
    }

    fn finish(self) -> SuffixGraph {
        SuffixGraph { edges: self.edges }
    }

    fn add(&mut self, from: StateId, morpheme: Morpheme, template: &'static str, to: StateId) {
        self.add_if(from, morpheme, template, to, Condition::Always);
    }

    fn add_if(
        &mut self,
        from: StateId,
        morpheme: Morpheme,
        template: &'static str,
        to: StateId,
        condition: Condition,
    ) {
        self.edges[from.index()].push(Edge {
            morpheme,
            template: Template::parse(template),
            target: to,
            condition,
            then: None,
        });
    }

    fn add_then(
        &mut self,
        from: StateId,
        morpheme: Morpheme,
        template: &'static str,
        to: StateId,
        then: Expect,
    ) {
        self.edges[from.index()].push(Edge {
            morpheme,
            template: Template::parse(template),
            target: to,
            condition: Condition::Always,
            then: Some(then),
        });
    }

    fn nominal(&mut self) {
        use Morpheme::*;
        use StateId as S;

        // Derivations on the bare noun.
        self.add(S::NounRoot, Dim, "CIk", S::NounRoot);
        self.add(S::NounRoot, Ness, "lIk", S::NounRoot);
        self.add(S::NounRoot, With, "lI", S::AdjRoot);
        self.add(S::NounRoot, Without, "sIz", S::AdjRoot);
        self.add(S::NounRoot, A3pl, "lAr", S::NounPl);
        self.add(S::NounRoot, A3sg, "", S::NounSg);

        self.add(S::NumeralRoot, A3pl, "lAr", S::NounPl);
        self.add(S::NumeralRoot, A3sg, "", S::NounSg);

        self.add(S::AdjRoot, Zero, "", S::NounRoot);

        // Possessives. P3pl is "lArI" on a singular noun and merges with the
        // plural suffix otherwise.
        for from in [S::NounSg, S::NounPl] {
            self.add(from, Pnon, "", S::NounPoss);
            self.possessives(from, S::NounPoss);
            self.add(from, P3sg, "+sI", S::NounPossP3);
        }
        self.add(S::NounSg, P3pl, "lArI", S::NounPossP3);
        self.add(S::NounPl, P3pl, "+sI", S::NounPossP3);

        self.add(S::NounPoss, Nom, "", S::NounCase);
        self.add(S::NounPoss, Dat, "+yA", S::NounCase);
        self.add(S::NounPoss, Acc, "+yI", S::NounCase);
        self.add(S::NounPoss, Loc, "DA", S::NounCaseLocGen);
        self.add(S::NounPoss, Abl, "DAn", S::NounCase);
        self.add(S::NounPoss, Gen, "+nIn", S::NounCaseLocGen);
        self.add(S::NounPoss, Ins, "+ylA", S::NounCase);
        self.add(S::NounPoss, Equ, "CA", S::NounCase);

        // Pronominal n after third person possessives and after -ki.
        self.add(S::NounPossP3, Nom, "", S::NounCase);
        self.add(S::NounPossP3, Dat, "nA", S::NounCase);
        self.add(S::NounPossP3, Acc, "nI", S::NounCase);
        self.add(S::NounPossP3, Loc, "ndA", S::NounCaseLocGen);
        self.add(S::NounPossP3, Abl, "ndAn", S::NounCase);
        self.add(S::NounPossP3, Gen, "nIn", S::NounCaseLocGen);
        self.add(S::NounPossP3, Ins, "+ylA", S::NounCase);
        self.add(S::NounPossP3, Equ, "ncA", S::NounCase);

        self.add(S::NounCase, Zero, "", S::NominalVerb);
        self.add(S::NounCaseLocGen, Zero, "", S::NominalVerb);
        self.add(S::NounCaseLocGen, Rel, "ki", S::Rel);

        self.add(S::Rel, A3sg, "", S::RelAgr);
        self.add(S::Rel, A3pl, "lAr", S::NounPl);
        self.add(S::RelAgr, Pnon, "", S::NounPossP3);
    }

    /// First and second person possessives.
    fn possessives(&mut self, from: StateId, to: StateId) {
        self.add(from, Morpheme::P1sg, "+Im", to);
        self.add(from, Morpheme::P2sg, "+In", to);
        self.add(from, Morpheme::P1pl, "+ImIz", to);
        self.add(from, Morpheme::P2pl, "+InIz", to);
    }

    fn copula(&mut self) {
        use Morpheme::*;
        use StateId as S;

        self.add(S::NominalVerb, Past, "+yDI", S::VerbPastAgr);
        self.add(S::NominalVerb, Narr, "+ymI\u{015F}", S::CopulaNarr);
        self.add(S::NominalVerb, Cond, "+ysA", S::VerbPastAgr);
        self.add(S::NominalVerb, Pres, "", S::CopulaPres);

        self.add(S::CopulaPres, A1sg, "+yIm", S::Done);
        self.add(S::CopulaPres, A2sg, "sIn", S::Done);
        self.add(S::CopulaPres, A1pl, "+yIz", S::Done);
        self.add(S::CopulaPres, A2pl, "sInIz", S::Done);
        self.add(S::CopulaPres, A3sg, "", S::CopA3sg);
        self.add(S::CopA3sg, Cop, "DIr", S::Done);

        self.person_agreement(S::CopulaNarr);

        // Past and conditional share the short person endings.
        self.add(S::VerbPastAgr, A1sg, "m", S::Done);
        self.add(S::VerbPastAgr, A2sg, "n", S::Done);
        self.add(S::VerbPastAgr, A3sg, "", S::Done);
        self.add(S::VerbPastAgr, A1pl, "k", S::Done);
        self.add(S::VerbPastAgr, A2pl, "nIz", S::Done);
        self.add(S::VerbPastAgr, A3pl, "lAr", S::Done);
    }

    /// The z-type person endings of the narrative, progressive, future and
    /// aorist.
    fn person_agreement(&mut self, from: StateId) {
        use Morpheme::*;
        self.add(from, A1sg, "+yIm", StateId::Done);
        self.add(from, A2sg, "sIn", StateId::Done);
        self.add(from, A3sg, "", StateId::Done);
        self.add(from, A1pl, "+yIz", StateId::Done);
        self.add(from, A2pl, "sInIz", StateId::Done);
        self.add(from, A3pl, "lAr", StateId::Done);
    }

    /// Tense, mood, infinitive, participle and converb suffixes of a verb
    /// stem.
    fn tenses(&mut self, from: StateId, with_aorist: bool) {
        use Morpheme::*;
        use StateId as S;

        self.add(from, Past, "DI", S::VerbPastAgr);
        self.add(from, Narr, "mI\u{015F}", S::VerbTense);
        self.add_if(from, Prog, "Iyor", S::VerbTense, Condition::AfterConsonant);
        self.add(from, Fut, "+yAcAk", S::VerbTense);
        if with_aorist {
            self.add_if(from, Aor, "+Ar", S::VerbTense, Condition::AoristA);
            self.add_if(from, Aor, "+Ir", S::VerbTense, Condition::AoristI);
        }
        self.add(from, Cond, "sA", S::VerbPastAgr);
        self.add(from, Opt, "+yA", S::OptAgr);
        self.add(from, Imp, "", S::ImpAgr);
        self.add(from, Inf1, "mAk", S::InfNoun);
        self.add(from, Inf2, "mA", S::NounRoot);
        self.add(from, PastPart, "DIk", S::PartAgr);
        self.add(from, FutPart, "+yAcAk", S::PartAgr);
        self.add(from, PresPart, "+yAn", S::AdjRoot);
        self.add(from, AfterDoingSo, "+yIp", S::Done);
        self.add(from, ByDoingSo, "+yArAk", S::Done);
        self.add(from, When, "+yIncA", S::Done);
    }

    fn verbal(&mut self) {
        use Morpheme::*;
        use StateId as S;

        self.add(S::VerbRoot, Able, "+yAbil", S::VerbAble);
        self.add(S::VerbRoot, Neg, "mA", S::VerbNeg);
        self.add_then(S::VerbRoot, Neg, "m", S::VerbNegProg, Expect::Progressive);
        self.tenses(S::VerbRoot, true);

        self.add(S::VerbAble, Neg, "mA", S::VerbNeg);
        self.add_then(S::VerbAble, Neg, "m", S::VerbNegProg, Expect::Progressive);
        self.tenses(S::VerbAble, true);

        self.tenses(S::VerbNeg, false);
        self.add(S::VerbNeg, Aor, "z", S::NegAorAgr);
        self.add(S::VerbNeg, Aor, "", S::NegAorFirst);
        self.add(S::VerbNegProg, Prog, "Iyor", S::VerbTense);

        self.person_agreement(S::VerbTense);
        self.add(S::VerbTense, Past, "+yDI", S::VerbPastAgr);
        self.add(S::VerbTense, Narr, "+ymI\u{015F}", S::CopulaNarr);
        self.add(S::VerbTense, Cond, "+ysA", S::VerbPastAgr);

        self.add(S::OptAgr, A1sg, "+yIm", S::Done);
        self.add(S::OptAgr, A3sg, "", S::Done);
        self.add(S::OptAgr, A1pl, "lIm", S::Done);

        self.add(S::ImpAgr, A2sg, "", S::Done);
        self.add(S::ImpAgr, A2pl, "+yIn", S::Done);
        self.add(S::ImpAgr, A3sg, "sIn", S::Done);

        self.add(S::NegAorAgr, A2sg, "sIn", S::Done);
        self.add(S::NegAorAgr, A3sg, "", S::Done);
        self.add(S::NegAorAgr, A2pl, "sInIz", S::Done);
        self.add(S::NegAorAgr, A3pl, "lAr", S::Done);
        self.add(S::NegAorFirst, A1sg, "m", S::Done);
        self.add(S::NegAorFirst, A1pl, "yIz", S::Done);

        self.add(S::InfNoun, Nom, "", S::NounCase);
        self.add(S::InfNoun, Loc, "DA", S::NounCase);
        self.add(S::InfNoun, Abl, "DAn", S::NounCase);
        self.add(S::InfNoun, Ins, "+ylA", S::NounCase);

        self.add(S::PartAgr, A3sg, "", S::PartPoss);
        self.add(S::PartAgr, A3pl, "lAr", S::NounPl);
        self.possessives(S::PartPoss, S::NounPoss);
        self.add(S::PartPoss, P3sg, "+sI", S::NounPossP3);
        self.add(S::PartPoss, P3pl, "lArI", S::NounPossP3);
    }
}
