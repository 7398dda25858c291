// Stem generation: the surface forms a root can take in running text.
//
// A root may surface in several shapes depending on what follows it:
//
//   kitap / kitab-     voicing
//   hak / hakk-        doubling
//   burun / burn-      last vowel drop
//   Iphone / ıphon-    silent final vowel of a pronunciation override
//   başla / başl-      progressive vowel drop (only before -Iyor)
//   de / di-           de/ye before y-initial suffixes
//
// Every shape becomes one `StemTransition` carrying the phonetic context
// that suffixes attach to and the constraint it puts on the first suffix.

use std::sync::Arc;

use hashbrown::HashMap;

use kelime_core::character::{
    is_vowel, last_letter, to_turkish_lower, voiced_counterpart,
};
use kelime_core::dictionary::{DictionaryItem, RootLexicon};
use kelime_core::enums::{PrimaryPos, RootAttribute};

use super::StateId;
use crate::phonology::{Expect, PhoneticContext};

/// One surface shape of a dictionary item.
#[derive(Debug, Clone)]
pub struct StemTransition {
    /// Lowercased surface, the key the analyzer matches input prefixes with.
    pub surface: String,
    pub item: Arc<DictionaryItem>,
    pub state: StateId,
    pub context: PhoneticContext,
    pub expect: Expect,
}

impl StemTransition {
    /// A stem built on the fly for an item that is not in the lexicon.
    pub fn runtime(item: Arc<DictionaryItem>, surface: String) -> Self {
        let context = PhoneticContext::from_pronunciation(item.pronunciation(), item.pronunciation());
        Self {
            state: StateId::root_for(item.primary_pos()),
            surface,
            item,
            context,
            expect: Expect::Any,
        }
    }
}

/// Generate every stem shape of an item.
pub fn generate(item: &Arc<DictionaryItem>) -> Vec<StemTransition> {
    let written = to_turkish_lower(item.root());
    let state = StateId::root_for(item.primary_pos());
    let make = |surface: String, expect: Expect| {
        let context = stem_context(item, &surface);
        StemTransition {
            surface,
            item: Arc::clone(item),
            state,
            context,
            expect,
        }
    };

    let mut out = Vec::with_capacity(2);
    if item.primary_pos() == PrimaryPos::Verb && (written == "de" || written == "ye") {
        let mut before_y = written.clone();
        before_y.pop();
        before_y.push('i');
        out.push(make(written.clone(), Expect::NotYStart));
        out.push(make(before_y, Expect::YStart));
    } else if let Some(modified) = mutated(item, &written) {
        out.push(make(written.clone(), Expect::ConsonantStart));
        out.push(make(modified, Expect::VowelStart));
    } else if let Some(dropped) = silent_final_vowel_dropped(item, &written) {
        out.push(make(written.clone(), Expect::Any));
        out.push(make(dropped, Expect::VowelStart));
    } else {
        out.push(make(written.clone(), Expect::Any));
    }

    if item.has_attribute(RootAttribute::ProgressiveVowelDrop) {
        let mut dropped = written;
        dropped.pop();
        if !dropped.is_empty() {
            out.push(make(dropped, Expect::Progressive));
        }
    }
    out
}

/// Phonetic context of one stem shape.
///
/// Items with a pronunciation override take their context from the
/// pronunciation; everything else from the stem surface itself, borrowing
/// the harmony vowel of the full pronunciation when the stem has none (`d`).
fn stem_context(item: &DictionaryItem, surface: &str) -> PhoneticContext {
    let source = if item.has_pronunciation_override() {
        item.pronunciation()
    } else {
        surface
    };
    let mut context = PhoneticContext::from_pronunciation(source, item.pronunciation());
    if item.has_attribute(RootAttribute::InverseHarmony) {
        context.harmony = context.harmony.fronted();
    }
    context.aorist_a = item.has_attribute(RootAttribute::AoristA);
    context
}

/// The shape a root takes before vowel-initial suffixes, when it differs.
fn mutated(item: &DictionaryItem, written: &str) -> Option<String> {
    let voicing = item.has_attribute(RootAttribute::Voicing);
    let doubling = item.has_attribute(RootAttribute::Doubling);
    let vowel_drop = item.has_attribute(RootAttribute::LastVowelDrop);
    if !(voicing || doubling || vowel_drop) {
        return None;
    }

    let mut chars: Vec<char> = written.chars().collect();
    let last = *chars.last()?;
    if voicing {
        let after_n = chars.len() >= 2 && chars[chars.len() - 2] == 'n';
        if let Some(voiced) = voiced_counterpart(last, after_n) {
            let end = chars.len() - 1;
            chars[end] = voiced;
        }
    }
    if doubling {
        chars.push(last);
    }
    if vowel_drop {
        let n = chars.len();
        if n >= 3 && is_vowel(chars[n - 2]) && !is_vowel(chars[n - 1]) {
            chars.remove(n - 2);
        }
    }

    let modified: String = chars.into_iter().collect();
    (modified != written).then_some(modified)
}

/// `Iphone` pronounced `ayfon`: the written final vowel is silent and goes
/// away before vowel-initial suffixes.
fn silent_final_vowel_dropped(item: &DictionaryItem, written: &str) -> Option<String> {
    if !item.has_pronunciation_override() {
        return None;
    }
    let written_vowel_final = last_letter(written).is_some_and(is_vowel);
    let spoken_consonant_final = last_letter(item.pronunciation()).is_some_and(|c| !is_vowel(c));
    if !(written_vowel_final && spoken_consonant_final) {
        return None;
    }
    let mut dropped = written.to_string();
    dropped.pop();
    (!dropped.is_empty()).then_some(dropped)
}

/// Stem shapes of a whole lexicon, keyed by surface.
#[derive(Debug, Default, Clone)]
pub struct StemIndex {
    by_surface: HashMap<String, Vec<StemTransition>>,
    len: usize,
}

impl StemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lexicon(lexicon: &RootLexicon) -> Self {
        let mut index = Self::new();
        for item in lexicon.iter() {
            index.add_item(item);
        }
        index
    }

    pub fn add_item(&mut self, item: &Arc<DictionaryItem>) {
        for stem in generate(item) {
            self.by_surface
                .entry(stem.surface.clone())
                .or_default()
                .push(stem);
            self.len += 1;
        }
    }

    /// Stems whose surface is exactly `surface`.
    pub fn get(&self, surface: &str) -> &[StemTransition] {
        self.by_surface.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of stems.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
