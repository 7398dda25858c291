// Part-of-speech and root attribute enumerations.
//
// Closed sets: every decision that depends on them (apostrophe policy, stem
// generation, root state of the suffix graph) matches them exhaustively.

use std::fmt;

/// Maximum word length in characters accepted by the analyzer by default.
pub const MAX_WORD_CHARS: usize = 255;

/// Primary part of speech of a dictionary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Adverb,
    Conjunction,
    Interjection,
    Verb,
    Pronoun,
    Numeral,
    Determiner,
    PostPositive,
    Question,
    Duplicator,
    Punctuation,
    Unknown,
}

impl PrimaryPos {
    /// Short form used in entry definitions and analysis output.
    pub fn short_form(self) -> &'static str {
        match self {
            PrimaryPos::Noun => "Noun",
            PrimaryPos::Adjective => "Adj",
            PrimaryPos::Adverb => "Adv",
            PrimaryPos::Conjunction => "Conj",
            PrimaryPos::Interjection => "Interj",
            PrimaryPos::Verb => "Verb",
            PrimaryPos::Pronoun => "Pron",
            PrimaryPos::Numeral => "Num",
            PrimaryPos::Determiner => "Det",
            PrimaryPos::PostPositive => "Postp",
            PrimaryPos::Question => "Ques",
            PrimaryPos::Duplicator => "Dup",
            PrimaryPos::Punctuation => "Punc",
            PrimaryPos::Unknown => "Unk",
        }
    }

    pub fn from_short_form(s: &str) -> Option<Self> {
        match s {
            "Noun" => Some(PrimaryPos::Noun),
            "Adj" => Some(PrimaryPos::Adjective),
            "Adv" => Some(PrimaryPos::Adverb),
            "Conj" => Some(PrimaryPos::Conjunction),
            "Interj" => Some(PrimaryPos::Interjection),
            "Verb" => Some(PrimaryPos::Verb),
            "Pron" => Some(PrimaryPos::Pronoun),
            "Num" => Some(PrimaryPos::Numeral),
            "Det" => Some(PrimaryPos::Determiner),
            "Postp" => Some(PrimaryPos::PostPositive),
            "Ques" => Some(PrimaryPos::Question),
            "Dup" => Some(PrimaryPos::Duplicator),
            "Punc" => Some(PrimaryPos::Punctuation),
            "Unk" => Some(PrimaryPos::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

/// Secondary part of speech. Affects orthography (apostrophes), not grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecondaryPos {
    #[default]
    None,
    ProperNoun,
    Abbreviation,
    Cardinal,
    Ordinal,
    RealNumber,
}

impl SecondaryPos {
    pub fn short_form(self) -> &'static str {
        match self {
            SecondaryPos::None => "None",
            SecondaryPos::ProperNoun => "Prop",
            SecondaryPos::Abbreviation => "Abbrv",
            SecondaryPos::Cardinal => "Card",
            SecondaryPos::Ordinal => "Ord",
            SecondaryPos::RealNumber => "Real",
        }
    }

    pub fn from_short_form(s: &str) -> Option<Self> {
        match s {
            "None" => Some(SecondaryPos::None),
            "Prop" => Some(SecondaryPos::ProperNoun),
            "Abbrv" => Some(SecondaryPos::Abbreviation),
            "Card" => Some(SecondaryPos::Cardinal),
            "Ord" => Some(SecondaryPos::Ordinal),
            "Real" => Some(SecondaryPos::RealNumber),
            _ => None,
        }
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

/// Morphemic and orthographic attributes of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootAttribute {
    /// Never write an apostrophe before suffixes, even for proper nouns.
    NoQuote,
    /// Final stop voices before vowel-initial suffixes: kitap → kitabı.
    Voicing,
    /// Suppresses inferred voicing: millet → milleti.
    NoVoicing,
    /// Final consonant doubles before vowel-initial suffixes: hak → hakkı.
    Doubling,
    /// Last vowel drops before vowel-initial suffixes: burun → burnu.
    LastVowelDrop,
    /// Suffix vowels take front harmony regardless of the root: saat → saati.
    InverseHarmony,
    /// Aorist in -Ar: gider.
    AoristA,
    /// Aorist in -Ir: gelir.
    AoristI,
    /// Final vowel of a verb root drops before -Iyor: başla → başlıyor.
    ProgressiveVowelDrop,
    /// Item created at analysis time (numerals), not read from a lexicon.
    Runtime,
}

impl RootAttribute {
    pub const ALL: [RootAttribute; 10] = [
        RootAttribute::NoQuote,
        RootAttribute::Voicing,
        RootAttribute::NoVoicing,
        RootAttribute::Doubling,
        RootAttribute::LastVowelDrop,
        RootAttribute::InverseHarmony,
        RootAttribute::AoristA,
        RootAttribute::AoristI,
        RootAttribute::ProgressiveVowelDrop,
        RootAttribute::Runtime,
    ];

    pub fn short_form(self) -> &'static str {
        match self {
            RootAttribute::NoQuote => "NoQuote",
            RootAttribute::Voicing => "Voicing",
            RootAttribute::NoVoicing => "NoVoicing",
            RootAttribute::Doubling => "Doubling",
            RootAttribute::LastVowelDrop => "LastVowelDrop",
            RootAttribute::InverseHarmony => "InverseHarmony",
            RootAttribute::AoristA => "Aorist_A",
            RootAttribute::AoristI => "Aorist_I",
            RootAttribute::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            RootAttribute::Runtime => "Runtime",
        }
    }

    pub fn from_short_form(s: &str) -> Option<Self> {
        RootAttribute::ALL
            .into_iter()
            .find(|attr| attr.short_form() == s)
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// A small set of root attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeSet(u16);

impl AttributeSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, attr: RootAttribute) {
        self.0 |= attr.bit();
    }

    pub fn remove(&mut self, attr: RootAttribute) {
        self.0 &= !attr.bit();
    }

    pub fn contains(&self, attr: RootAttribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = RootAttribute> + '_ {
        RootAttribute::ALL
            .into_iter()
            .filter(move |attr| self.contains(*attr))
    }
}

impl FromIterator<RootAttribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = RootAttribute>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for attr in iter {
            set.insert(attr);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_pos_short_forms_round_trip() {
        for pos in [
            PrimaryPos::Noun,
            PrimaryPos::Adjective,
            PrimaryPos::Verb,
            PrimaryPos::Numeral,
            PrimaryPos::PostPositive,
        ] {
            assert_eq!(PrimaryPos::from_short_form(pos.short_form()), Some(pos));
        }
        assert_eq!(PrimaryPos::from_short_form("Nn"), None);
    }

    #[test]
    fn secondary_pos_proper_noun() {
        assert_eq!(
            SecondaryPos::from_short_form("Prop"),
            Some(SecondaryPos::ProperNoun)
        );
        assert_eq!(SecondaryPos::default(), SecondaryPos::None);
    }

    #[test]
    fn attribute_lookup() {
        assert_eq!(
            RootAttribute::from_short_form("NoQuote"),
            Some(RootAttribute::NoQuote)
        );
        assert_eq!(
            RootAttribute::from_short_form("Aorist_A"),
            Some(RootAttribute::AoristA)
        );
        assert_eq!(RootAttribute::from_short_form("Quote"), None);
    }

    #[test]
    fn attribute_set_operations() {
        let mut set = AttributeSet::new();
        assert!(set.is_empty());
        set.insert(RootAttribute::Voicing);
        set.insert(RootAttribute::NoQuote);
        assert!(set.contains(RootAttribute::Voicing));
        assert!(!set.contains(RootAttribute::Doubling));
        set.remove(RootAttribute::Voicing);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![RootAttribute::NoQuote]);
    }

    #[test]
    fn attribute_set_from_iter() {
        let set: AttributeSet = [RootAttribute::AoristA, RootAttribute::Runtime]
            .into_iter()
            .collect();
        assert!(set.contains(RootAttribute::AoristA));
        assert!(set.contains(RootAttribute::Runtime));
    }
}
