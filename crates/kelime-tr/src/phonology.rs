// Suffix templates and phonological resolution.
//
// Suffixes are written as templates with meta-letters, resolved against the
// phonetic context of whatever precedes them:
//
//   A    two-way harmony vowel (a/e)
//   I    four-way harmony vowel (ı/i/u/ü)
//   D    d, or t after a voiceless consonant
//   C    c, or ç after a voiceless consonant
//   +x   buffer consonant x, present only after a vowel (+y, +n, +s)
//   +I   harmony vowel present only after a consonant (+Im, +In, +Ir)
//   +A   same, two-way
//
// Resolution is table driven: harmony vowels are looked up by vowel class,
// D/C by the class of the final letter.

use kelime_core::character::{VowelClass, is_vowel, is_voiceless, last_letter, vowel_class};

/// Harmony vowels. Rows: two-way (A), four-way (I). Columns: `VowelClass` order.
const HARMONY_TABLE: [[char; 4]; 2] = [
    ['a', 'a', 'e', 'e'],
    ['\u{0131}', 'u', 'i', '\u{00FC}'],
];

/// Devoicing alternations. Rows: D, C. Columns: `FinalLetterClass` order.
const DEVOICING_TABLE: [[char; 3]; 2] = [['d', 'd', 't'], ['c', 'c', '\u{00E7}']];

/// Class of the letter immediately preceding a suffix symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalLetterClass {
    Vowel,
    VoicedConsonant,
    VoicelessConsonant,
}

impl FinalLetterClass {
    fn of(c: char) -> Self {
        if is_vowel(c) {
            FinalLetterClass::Vowel
        } else if is_voiceless(c) {
            FinalLetterClass::VoicelessConsonant
        } else {
            FinalLetterClass::VoicedConsonant
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HarmonyRow {
    TwoWay = 0,
    FourWay = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DevoicingRow {
    D = 0,
    C = 1,
}

/// Look up a harmony vowel.
fn harmony_vowel(row: HarmonyRow, class: VowelClass) -> char {
    HARMONY_TABLE[row as usize][class.index()]
}

/// Look up a devoicing alternant.
fn devoiced(row: DevoicingRow, prev: FinalLetterClass) -> char {
    DEVOICING_TABLE[row as usize][prev.index()]
}

/// Phonological left context of a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneticContext {
    /// Last letter so far; `None` only for an empty context.
    pub last_letter: Option<char>,
    /// Class of the closest preceding vowel.
    pub harmony: VowelClass,
    /// The stem so far is a root of the -Ar aorist class.
    pub aorist_a: bool,
}

impl PhoneticContext {
    /// Context of a root, computed from its pronunciation.
    ///
    /// `fallback_vowel_source` supplies the harmony vowel when `source` has
    /// none (the bare consonant stems of progressive vowel drop).
    pub fn from_pronunciation(source: &str, fallback_vowel_source: &str) -> Self {
        let vowel = source
            .chars()
            .rev()
            .find_map(vowel_class)
            .or_else(|| fallback_vowel_source.chars().rev().find_map(vowel_class))
            .unwrap_or(VowelClass::FrontUnrounded);
        Self {
            last_letter: last_letter(source),
            harmony: vowel,
            aorist_a: false,
        }
    }

    pub fn ends_with_vowel(&self) -> bool {
        self.last_letter.is_some_and(is_vowel)
    }

    fn final_class(&self) -> FinalLetterClass {
        self.last_letter
            .map(FinalLetterClass::of)
            .unwrap_or(FinalLetterClass::Vowel)
    }

    /// Extend the context with a surface letter.
    pub fn push(&mut self, c: char) {
        if let Some(class) = vowel_class(c) {
            self.harmony = class;
        }
        if c.is_alphabetic() {
            self.last_letter = Some(c);
        }
    }

    /// Context after appending a non-empty suffix surface.
    pub fn extended(&self, surface: &str) -> Self {
        let mut next = *self;
        for c in surface.chars() {
            next.push(c);
        }
        if !surface.is_empty() {
            next.aorist_a = false;
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Letter(char),
    TwoWay,
    FourWay,
    D,
    C,
    /// Consonant written only after a vowel.
    BufferConsonant(char),
    /// Harmony vowel written only after a consonant.
    BufferVowel(HarmonyRow),
}

/// A parsed suffix template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: &'static str,
    symbols: Vec<Symbol>,
}

impl Template {
    /// Parse a template. Unknown characters are taken literally.
    pub fn parse(source: &'static str) -> Self {
        let mut symbols = Vec::with_capacity(source.len());
        let mut chars = source.chars();
        while let Some(c) = chars.next() {
            let symbol = match c {
                'A' => Symbol::TwoWay,
                'I' => Symbol::FourWay,
                'D' => Symbol::D,
                'C' => Symbol::C,
                '+' => match chars.next() {
                    Some('A') => Symbol::BufferVowel(HarmonyRow::TwoWay),
                    Some('I') => Symbol::BufferVowel(HarmonyRow::FourWay),
                    Some(buffer) => Symbol::BufferConsonant(buffer),
                    None => break,
                },
                letter => Symbol::Letter(letter),
            };
            symbols.push(symbol);
        }
        Self { source, symbols }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Resolve the template to its surface form in the given context.
    pub fn render(&self, ctx: &PhoneticContext) -> String {
        let mut ctx = *ctx;
        let mut out = String::new();
        for symbol in &self.symbols {
            let letter = match *symbol {
                Symbol::Letter(c) => Some(c),
                Symbol::TwoWay => Some(harmony_vowel(HarmonyRow::TwoWay, ctx.harmony)),
                Symbol::FourWay => Some(harmony_vowel(HarmonyRow::FourWay, ctx.harmony)),
                Symbol::D => Some(devoiced(DevoicingRow::D, ctx.final_class())),
                Symbol::C => Some(devoiced(DevoicingRow::C, ctx.final_class())),
                Symbol::BufferConsonant(c) => ctx.ends_with_vowel().then_some(c),
                Symbol::BufferVowel(row) => {
                    (!ctx.ends_with_vowel()).then(|| harmony_vowel(row, ctx.harmony))
                }
            };
            if let Some(c) = letter {
                out.push(c);
                ctx.push(c);
            }
        }
        out
    }
}

/// Constraint a segment places on the first letter of the next non-empty
/// morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Any,
    /// Mutated stems (kitab, hakk, burn, eceğ) need a vowel next.
    VowelStart,
    /// Unmutated forms of mutating stems need a consonant next or the end.
    ConsonantStart,
    /// `di`, `yi`: only before y-initial suffixes.
    YStart,
    /// `de`, `ye`: never before y-initial suffixes.
    NotYStart,
    /// Vowel-dropped verb stems (başl, d, gelm): only the -Iyor progressive.
    Progressive,
}

impl Expect {
    /// Whether a non-empty surface may follow.
    pub fn admits(self, surface: &str) -> bool {
        let Some(first) = surface.chars().next() else {
            return true;
        };
        match self {
            Expect::Any | Expect::Progressive => true,
            Expect::VowelStart => is_vowel(first),
            Expect::ConsonantStart => !is_vowel(first),
            Expect::YStart => first == 'y',
            Expect::NotYStart => first != 'y',
        }
    }

    /// Whether the word may end here.
    pub fn admits_end(self) -> bool {
        matches!(self, Expect::Any | Expect::ConsonantStart | Expect::NotYStart)
    }
}

/// A resolved suffix surface plus the constraint it puts on its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allomorph {
    pub surface: String,
    pub next: Expect,
}

/// All surface forms of a template in a context.
///
/// A suffix ending in vowel + `k` has two forms: the plain one before
/// consonants or the end of the word, and one with `ğ` before vowels
/// (-AcAk → -acak / -acağ).
pub fn allomorphs(template: &Template, ctx: &PhoneticContext) -> Vec<Allomorph> {
    let surface = template.render(ctx);
    let chars: Vec<char> = surface.chars().collect();
    let voices = chars.len() >= 2 && chars[chars.len() - 1] == 'k' && is_vowel(chars[chars.len() - 2]);
    if voices {
        let mut voiced: String = chars[..chars.len() - 1].iter().collect();
        voiced.push('\u{011F}');
        vec![
            Allomorph {
                surface,
                next: Expect::ConsonantStart,
            },
            Allomorph {
                surface: voiced,
                next: Expect::VowelStart,
            },
        ]
    } else {
        vec![Allomorph {
            surface,
            next: Expect::Any,
        }]
    }
}
