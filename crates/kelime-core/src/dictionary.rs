// Dictionary items, entry-definition parsing and the root lexicon.
//
// Entry definitions look like:
//   elma
//   demek
//   Iphone [Pr:ayfon]
//   Blah [A:NoQuote]
//   hak [P:Noun; A:Doubling, NoVoicing]
//   yüz [P:Num, Card] [Pr:yüz]
//
// Parsing is strict: a malformed line fails the whole lexicon build, so the
// analyzer never sees a half-constructed item.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::character::{
    is_upper, is_vowel, last_letter, syllable_count, to_turkish_lower,
};
use crate::enums::{AttributeSet, PrimaryPos, RootAttribute, SecondaryPos};

/// Construction-time failure of an entry definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    #[error("empty lemma in entry `{line}`")]
    EmptyLemma { line: String },
    #[error("unterminated bracket in entry `{line}`")]
    UnterminatedBracket { line: String },
    #[error("unexpected text `{text}` outside brackets in entry `{line}`")]
    StrayText { line: String, text: String },
    #[error("malformed tag `{tag}` in entry `{line}`")]
    MalformedTag { line: String, tag: String },
    #[error("unknown tag `{tag}` in entry `{line}`")]
    UnknownTag { line: String, tag: String },
    #[error("unknown part of speech `{value}` in entry `{line}`")]
    UnknownPos { line: String, value: String },
    #[error("unknown attribute `{value}` in entry `{line}`")]
    UnknownAttribute { line: String, value: String },
    #[error("verb lemma must end with -mek or -mak: `{line}`")]
    InvalidVerbLemma { line: String },
}

/// Verb roots of one syllable that still take the -Ir aorist.
const AORIST_I_MONOSYLLABLES: &[&str] = &[
    "al", "bil", "bul", "dur", "gel", "gör", "kal", "ol", "öl", "san", "ver", "var", "vur",
];

/// One sense of a lexicon entry.
///
/// `root` equals `lemma` except for verbs, whose root drops the infinitive
/// suffix (`demek` → `de`). `pronunciation` drives suffix phonology only;
/// the written root is what a formatter emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryItem {
    id: String,
    lemma: String,
    root: String,
    pronunciation: String,
    primary_pos: PrimaryPos,
    secondary_pos: SecondaryPos,
    attributes: AttributeSet,
}

impl DictionaryItem {
    /// Create an item from already validated parts.
    ///
    /// An empty `pronunciation` defaults to the lowercased root.
    pub fn new(
        lemma: impl Into<String>,
        root: impl Into<String>,
        pronunciation: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: SecondaryPos,
        attributes: AttributeSet,
    ) -> Self {
        let lemma = lemma.into();
        let root = root.into();
        let mut pronunciation = pronunciation.into();
        if pronunciation.is_empty() {
            pronunciation = to_turkish_lower(&root);
        }
        let id = match secondary_pos {
            SecondaryPos::None => format!("{lemma}_{primary_pos}"),
            secondary => format!("{lemma}_{primary_pos}_{secondary}"),
        };
        Self {
            id,
            lemma,
            root,
            pronunciation,
            primary_pos,
            secondary_pos,
            attributes,
        }
    }

    /// Parse one entry-definition line and infer missing attributes.
    pub fn from_line(line: &str) -> Result<Self, LexiconError> {
        let entry = parse_entry(line)?;
        build_item(line, entry)
    }

    /// Unique id: `lemma_Pos` or `lemma_Pos_SecondaryPos`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    pub fn primary_pos(&self) -> PrimaryPos {
        self.primary_pos
    }

    pub fn secondary_pos(&self) -> SecondaryPos {
        self.secondary_pos
    }

    pub fn attributes(&self) -> AttributeSet {
        self.attributes
    }

    pub fn has_attribute(&self, attr: RootAttribute) -> bool {
        self.attributes.contains(attr)
    }

    pub fn is_proper_noun(&self) -> bool {
        self.secondary_pos == SecondaryPos::ProperNoun
    }

    /// True when the pronunciation differs from the written root.
    pub fn has_pronunciation_override(&self) -> bool {
        self.pronunciation != to_turkish_lower(&self.root)
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [P:{}", self.lemma, self.primary_pos)?;
        if self.secondary_pos != SecondaryPos::None {
            write!(f, ", {}", self.secondary_pos)?;
        }
        if self.has_pronunciation_override() {
            write!(f, "; Pr:{}", self.pronunciation)?;
        }
        let attrs: Vec<&str> = self.attributes.iter().map(RootAttribute::short_form).collect();
        if !attrs.is_empty() {
            write!(f, "; A:{}", attrs.join(", "))?;
        }
        f.write_str("]")
    }
}

// ---------------------------------------------------------------------------
// Entry-definition parsing
// ---------------------------------------------------------------------------

/// Raw fields of an entry definition, before inference.
#[derive(Debug, Default, PartialEq, Eq)]
struct ParsedEntry {
    lemma: String,
    primary_pos: Option<PrimaryPos>,
    secondary_pos: Option<SecondaryPos>,
    pronunciation: Option<String>,
    attributes: AttributeSet,
}

fn parse_entry(line: &str) -> Result<ParsedEntry, LexiconError> {
    let line_owned = || line.to_string();
    let trimmed = line.trim();
    let (lemma, mut rest) = match trimmed.find('[') {
        Some(idx) => (trimmed[..idx].trim(), &trimmed[idx..]),
        None => (trimmed, ""),
    };
    if lemma.is_empty() {
        return Err(LexiconError::EmptyLemma { line: line_owned() });
    }

    let mut entry = ParsedEntry {
        lemma: lemma.to_string(),
        ..ParsedEntry::default()
    };

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let Some(body) = rest.strip_prefix('[') else {
            return Err(LexiconError::StrayText {
                line: line_owned(),
                text: rest.to_string(),
            });
        };
        let Some(close) = body.find(']') else {
            return Err(LexiconError::UnterminatedBracket { line: line_owned() });
        };
        let inner = &body[..close];
        if inner.contains('[') {
            return Err(LexiconError::UnterminatedBracket { line: line_owned() });
        }
        for tag in inner.split(';').map(str::trim).filter(|t| !t.is_empty()) {
            parse_tag(line, tag, &mut entry)?;
        }
        rest = &body[close + 1..];
    }

    Ok(entry)
}

fn parse_tag(line: &str, tag: &str, entry: &mut ParsedEntry) -> Result<(), LexiconError> {
    let Some((name, value)) = tag.split_once(':') else {
        return Err(LexiconError::MalformedTag {
            line: line.to_string(),
            tag: tag.to_string(),
        });
    };
    let value = value.trim();
    if value.is_empty() {
        return Err(LexiconError::MalformedTag {
            line: line.to_string(),
            tag: tag.to_string(),
        });
    }

    match name.trim() {
        "P" => {
            let mut values = value.split(',').map(str::trim);
            if let Some(primary) = values.next() {
                entry.primary_pos = Some(PrimaryPos::from_short_form(primary).ok_or_else(
                    || LexiconError::UnknownPos {
                        line: line.to_string(),
                        value: primary.to_string(),
                    },
                )?);
            }
            if let Some(secondary) = values.next() {
                entry.secondary_pos = Some(SecondaryPos::from_short_form(secondary).ok_or_else(
                    || LexiconError::UnknownPos {
                        line: line.to_string(),
                        value: secondary.to_string(),
                    },
                )?);
            }
            if let Some(extra) = values.next() {
                return Err(LexiconError::UnknownPos {
                    line: line.to_string(),
                    value: extra.to_string(),
                });
            }
        }
        "A" => {
            for value in value.split(',').map(str::trim) {
                let attr = RootAttribute::from_short_form(value).ok_or_else(|| {
                    LexiconError::UnknownAttribute {
                        line: line.to_string(),
                        value: value.to_string(),
                    }
                })?;
                entry.attributes.insert(attr);
            }
        }
        "Pr" => entry.pronunciation = Some(to_turkish_lower(value)),
        other => {
            return Err(LexiconError::UnknownTag {
                line: line.to_string(),
                tag: other.to_string(),
            });
        }
    }
    Ok(())
}

/// Fill in part of speech, root and inferred attributes.
fn build_item(line: &str, entry: ParsedEntry) -> Result<DictionaryItem, LexiconError> {
    let ParsedEntry {
        lemma,
        primary_pos,
        secondary_pos,
        pronunciation,
        mut attributes,
    } = entry;

    let lower = to_turkish_lower(&lemma);
    let looks_like_verb =
        lower.chars().count() > 3 && (lower.ends_with("mek") || lower.ends_with("mak"));
    let starts_upper = lemma.chars().next().is_some_and(is_upper);

    let (primary_pos, secondary_pos) = match (primary_pos, secondary_pos) {
        (Some(primary), secondary) => (primary, secondary.unwrap_or_default()),
        (None, Some(secondary)) => (PrimaryPos::Noun, secondary),
        (None, None) if looks_like_verb => (PrimaryPos::Verb, SecondaryPos::None),
        (None, None) if starts_upper => (PrimaryPos::Noun, SecondaryPos::ProperNoun),
        (None, None) => (PrimaryPos::Noun, SecondaryPos::None),
    };

    let root = if primary_pos == PrimaryPos::Verb {
        if !looks_like_verb {
            return Err(LexiconError::InvalidVerbLemma {
                line: line.to_string(),
            });
        }
        let keep = lemma.chars().count() - 3;
        lemma.chars().take(keep).collect()
    } else {
        lemma.clone()
    };

    let pronunciation = pronunciation.unwrap_or_else(|| to_turkish_lower(&root));
    infer_attributes(
        &root,
        &pronunciation,
        primary_pos,
        secondary_pos,
        &mut attributes,
    );

    Ok(DictionaryItem::new(
        lemma,
        root,
        pronunciation,
        primary_pos,
        secondary_pos,
        attributes,
    ))
}

fn infer_attributes(
    root: &str,
    pronunciation: &str,
    primary_pos: PrimaryPos,
    secondary_pos: SecondaryPos,
    attributes: &mut AttributeSet,
) {
    let written = to_turkish_lower(root);
    match primary_pos {
        PrimaryPos::Noun | PrimaryPos::Adjective => {
            let voiceable = written
                .chars()
                .last()
                .is_some_and(|c| matches!(c, 'p' | '\u{00E7}' | 't' | 'k'));
            if secondary_pos == SecondaryPos::None
                && voiceable
                && written == pronunciation
                && syllable_count(&written) > 1
                && !attributes.contains(RootAttribute::NoVoicing)
            {
                attributes.insert(RootAttribute::Voicing);
            }
        }
        PrimaryPos::Verb => {
            let vowel_final = last_letter(&written).is_some_and(is_vowel);
            if vowel_final {
                attributes.insert(RootAttribute::ProgressiveVowelDrop);
            }
            if !attributes.contains(RootAttribute::AoristA)
                && !attributes.contains(RootAttribute::AoristI)
            {
                let aorist_a = syllable_count(&written) == 1
                    && !vowel_final
                    && !AORIST_I_MONOSYLLABLES.contains(&written.as_str());
                attributes.insert(if aorist_a {
                    RootAttribute::AoristA
                } else {
                    RootAttribute::AoristI
                });
            }
        }
        PrimaryPos::Adverb
        | PrimaryPos::Conjunction
        | PrimaryPos::Interjection
        | PrimaryPos::Pronoun
        | PrimaryPos::Numeral
        | PrimaryPos::Determiner
        | PrimaryPos::PostPositive
        | PrimaryPos::Question
        | PrimaryPos::Duplicator
        | PrimaryPos::Punctuation
        | PrimaryPos::Unknown => {}
    }
}

// ---------------------------------------------------------------------------
// Root lexicon
// ---------------------------------------------------------------------------

/// The set of dictionary items an analyzer is built from.
///
/// Items are shared (`Arc`) with the analyses that root in them, so a lexicon
/// and everything produced from it can be used from several threads.
#[derive(Debug, Default, Clone)]
pub struct RootLexicon {
    items: Vec<Arc<DictionaryItem>>,
    by_id: HashMap<String, usize>,
    by_lemma: HashMap<String, Vec<usize>>,
}

impl RootLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from entry-definition lines.
    ///
    /// Blank lines and lines starting with `##` are skipped. The first
    /// malformed line aborts the build.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with("##") {
                continue;
            }
            lexicon.add(DictionaryItem::from_line(line)?);
        }
        debug!("built root lexicon with {} items", lexicon.len());
        Ok(lexicon)
    }

    /// Add an item. Returns `false` (and keeps the existing item) when an
    /// item with the same id is already present.
    pub fn add(&mut self, item: DictionaryItem) -> bool {
        if self.by_id.contains_key(item.id()) {
            warn!("duplicate dictionary item `{}` skipped", item.id());
            return false;
        }
        let index = self.items.len();
        self.by_id.insert(item.id().to_string(), index);
        self.by_lemma
            .entry(item.lemma().to_string())
            .or_default()
            .push(index);
        self.items.push(Arc::new(item));
        true
    }

    /// All senses registered under a lemma, in insertion order.
    pub fn lookup(&self, lemma: &str) -> Vec<&Arc<DictionaryItem>> {
        self.by_lemma
            .get(lemma)
            .map(|indices| indices.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// The sense of a lemma with the given primary part of speech.
    pub fn lookup_with_pos(&self, lemma: &str, pos: PrimaryPos) -> Option<&Arc<DictionaryItem>> {
        self.lookup(lemma)
            .into_iter()
            .find(|item| item.primary_pos() == pos)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Arc<DictionaryItem>> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DictionaryItem>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lowercase_entry_is_noun() {
        let item = DictionaryItem::from_line("elma").unwrap();
        assert_eq!(item.lemma(), "elma");
        assert_eq!(item.root(), "elma");
        assert_eq!(item.pronunciation(), "elma");
        assert_eq!(item.primary_pos(), PrimaryPos::Noun);
        assert_eq!(item.secondary_pos(), SecondaryPos::None);
        assert_eq!(item.id(), "elma_Noun");
    }

    #[test]
    fn capitalized_entry_is_proper_noun() {
        let item = DictionaryItem::from_line("Ankara").unwrap();
        assert!(item.is_proper_noun());
        assert_eq!(item.id(), "Ankara_Noun_Prop");
    }

    #[test]
    fn verb_root_drops_infinitive() {
        let item = DictionaryItem::from_line("demek").unwrap();
        assert_eq!(item.primary_pos(), PrimaryPos::Verb);
        assert_eq!(item.lemma(), "demek");
        assert_eq!(item.root(), "de");
        assert!(item.has_attribute(RootAttribute::ProgressiveVowelDrop));
        assert!(item.has_attribute(RootAttribute::AoristI));
    }

    #[test]
    fn aorist_class_inference() {
        let git = DictionaryItem::from_line("gitmek [A:Voicing]").unwrap();
        assert!(git.has_attribute(RootAttribute::AoristA));
        let gel = DictionaryItem::from_line("gelmek").unwrap();
        assert!(gel.has_attribute(RootAttribute::AoristI));
        let calis = DictionaryItem::from_line("çalışmak").unwrap();
        assert!(calis.has_attribute(RootAttribute::AoristI));
    }

    #[test]
    fn pronunciation_tag() {
        let item = DictionaryItem::from_line("Iphone [Pr:ayfon]").unwrap();
        assert_eq!(item.lemma(), "Iphone");
        assert_eq!(item.pronunciation(), "ayfon");
        assert!(item.has_pronunciation_override());
        assert!(item.is_proper_noun());
    }

    #[test]
    fn attribute_tag() {
        let item = DictionaryItem::from_line("Blah [A:NoQuote]").unwrap();
        assert!(item.has_attribute(RootAttribute::NoQuote));
        assert!(!item.has_pronunciation_override());
    }

    #[test]
    fn multiple_tags_and_brackets() {
        let item = DictionaryItem::from_line("hak [P:Noun; A:Doubling, NoVoicing] [Pr:hak]")
            .unwrap();
        assert!(item.has_attribute(RootAttribute::Doubling));
        assert!(item.has_attribute(RootAttribute::NoVoicing));
        assert!(!item.has_attribute(RootAttribute::Voicing));

        let num = DictionaryItem::from_line("yüz [P:Num, Card]").unwrap();
        assert_eq!(num.primary_pos(), PrimaryPos::Numeral);
        assert_eq!(num.secondary_pos(), SecondaryPos::Cardinal);
    }

    #[test]
    fn voicing_inferred_for_polysyllabic_stops() {
        assert!(
            DictionaryItem::from_line("kitap")
                .unwrap()
                .has_attribute(RootAttribute::Voicing)
        );
        assert!(
            !DictionaryItem::from_line("ip")
                .unwrap()
                .has_attribute(RootAttribute::Voicing)
        );
        assert!(
            !DictionaryItem::from_line("millet [A:NoVoicing]")
                .unwrap()
                .has_attribute(RootAttribute::Voicing)
        );
        assert!(
            !DictionaryItem::from_line("Ahmet")
                .unwrap()
                .has_attribute(RootAttribute::Voicing)
        );
    }

    #[test]
    fn malformed_entries_fail() {
        assert!(matches!(
            DictionaryItem::from_line("   [P:Noun]"),
            Err(LexiconError::EmptyLemma { .. })
        ));
        assert!(matches!(
            DictionaryItem::from_line("elma [P:Noun"),
            Err(LexiconError::UnterminatedBracket { .. })
        ));
        assert!(matches!(
            DictionaryItem::from_line("elma [P:Noun] extra"),
            Err(LexiconError::StrayText { .. })
        ));
        assert!(matches!(
            DictionaryItem::from_line("elma [Noun]"),
            Err(LexiconError::MalformedTag { .. })
        ));
        assert!(matches!(
            DictionaryItem::from_line("elma [X:Y]"),
            Err(LexiconError::UnknownTag { .. })
        ));
        assert!(matches!(
            DictionaryItem::from_line("elma [P:Nn]"),
            Err(LexiconError::UnknownPos { .. })
        ));
        assert!(matches!(
            DictionaryItem::from_line("Blah [A:Quote]"),
            Err(LexiconError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            DictionaryItem::from_line("koş [P:Verb]"),
            Err(LexiconError::InvalidVerbLemma { .. })
        ));
    }

    #[test]
    fn lexicon_from_lines() {
        let lexicon =
            RootLexicon::from_lines(["## comment", "elma", "", "kitap", "demek"]).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.lookup("kitap").len(), 1);
        assert!(lexicon.lookup("armut").is_empty());
        assert!(lexicon.get_by_id("demek_Verb").is_some());
        assert!(
            lexicon
                .lookup_with_pos("demek", PrimaryPos::Verb)
                .is_some()
        );
        assert!(lexicon.lookup_with_pos("demek", PrimaryPos::Noun).is_none());
    }

    #[test]
    fn lexicon_build_fails_fast() {
        let err = RootLexicon::from_lines(["elma", "Blah [A:Bogus]"]).unwrap_err();
        assert_eq!(
            err,
            LexiconError::UnknownAttribute {
                line: "Blah [A:Bogus]".to_string(),
                value: "Bogus".to_string(),
            }
        );
    }

    #[test]
    fn homographs_with_different_pos() {
        let lexicon = RootLexicon::from_lines(["yüz", "yüz [P:Num]", "yüz"]).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("yüz").len(), 2);
    }

    #[test]
    fn display_round_trips_tags() {
        let item = DictionaryItem::from_line("Google [Pr:gugıl]").unwrap();
        assert_eq!(item.to_string(), "Google [P:Noun, Prop; Pr:gugıl]");
    }
}
