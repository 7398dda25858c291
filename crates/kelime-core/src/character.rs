// Character classification and Turkish-aware case mapping.
//
// Turkish has two distinct `i` letters: dotted (i / İ) and dotless (ı / I).
// The generic Unicode mappings get both of them wrong for Turkish text, so
// every case conversion in the workspace goes through the functions here.

// ---------------------------------------------------------------------------
// Turkish phonological constants
// ---------------------------------------------------------------------------

/// Turkish vowels (lowercase), including the circumflexed loan-word vowels.
const TURKISH_VOWELS: &[char] = &[
    'a', 'e', '\u{0131}', 'i', 'o', '\u{00F6}', 'u', '\u{00FC}', '\u{00E2}', '\u{00EE}',
    '\u{00FB}',
];

/// Voiceless consonants ("fıstıkçı şahap"): f s t k ç ş h p.
const VOICELESS_CONSONANTS: &[char] = &['f', 's', 't', 'k', '\u{00E7}', '\u{015F}', 'h', 'p'];

/// Vowel classes used by vowel harmony.
///
/// The order of the variants is the column order of the harmony tables in
/// the phonology module; do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelClass {
    /// a, ı (â)
    BackUnrounded,
    /// o, u (û)
    BackRounded,
    /// e, i (î)
    FrontUnrounded,
    /// ö, ü
    FrontRounded,
}

impl VowelClass {
    /// Column index into harmony tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_back(self) -> bool {
        matches!(self, VowelClass::BackUnrounded | VowelClass::BackRounded)
    }

    pub fn is_rounded(self) -> bool {
        matches!(self, VowelClass::BackRounded | VowelClass::FrontRounded)
    }

    /// The front counterpart with the same roundedness.
    pub fn fronted(self) -> Self {
        if self.is_rounded() {
            VowelClass::FrontRounded
        } else {
            VowelClass::FrontUnrounded
        }
    }
}

/// Return the harmony class of a vowel, or `None` for non-vowels.
pub fn vowel_class(c: char) -> Option<VowelClass> {
    match turkish_lower(c) {
        'a' | '\u{0131}' | '\u{00E2}' => Some(VowelClass::BackUnrounded),
        'o' | 'u' | '\u{00FB}' => Some(VowelClass::BackRounded),
        'e' | 'i' | '\u{00EE}' => Some(VowelClass::FrontUnrounded),
        '\u{00F6}' | '\u{00FC}' => Some(VowelClass::FrontRounded),
        _ => None,
    }
}

/// Check whether a character is a Turkish vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    TURKISH_VOWELS.contains(&turkish_lower(c))
}

/// Check whether a character is a voiceless consonant (case-insensitive).
pub fn is_voiceless(c: char) -> bool {
    VOICELESS_CONSONANTS.contains(&turkish_lower(c))
}

/// Voiced counterpart of a stem-final stop, used for consonant mutation
/// before vowel-initial suffixes: p→b, ç→c, t→d, k→ğ, g→ğ.
///
/// `after_n` selects the nasal variant `nk → ng`.
pub fn voiced_counterpart(c: char, after_n: bool) -> Option<char> {
    match c {
        'p' => Some('b'),
        '\u{00E7}' => Some('c'),
        't' => Some('d'),
        'k' if after_n => Some('g'),
        'k' | 'g' => Some('\u{011F}'),
        _ => None,
    }
}

/// The last alphabetic character of a string, if any.
pub fn last_letter(s: &str) -> Option<char> {
    s.chars().rev().find(|c| c.is_alphabetic())
}

/// Number of syllables (vowels) in a string.
pub fn syllable_count(s: &str) -> usize {
    s.chars().filter(|&c| is_vowel(c)).count()
}

/// Apostrophes accepted between a proper noun or numeral and its suffixes.
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

// ---------------------------------------------------------------------------
// Turkish case conversion
// ---------------------------------------------------------------------------

/// Convert a character to lowercase using Turkish rules.
///
/// `I` maps to dotless `ı` and `İ` maps to `i`; everything else uses the
/// simple one-to-one Unicode mapping.
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Convert a character to uppercase using Turkish rules.
///
/// `i` maps to dotted `İ` and `ı` maps to `I`.
pub fn turkish_upper(c: char) -> char {
    match c {
        'i' => '\u{0130}',
        '\u{0131}' => 'I',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Lowercase a whole string using Turkish rules.
pub fn to_turkish_lower(s: &str) -> String {
    s.chars().map(turkish_lower).collect()
}

/// Uppercase a whole string using Turkish rules.
pub fn to_turkish_upper(s: &str) -> String {
    s.chars().map(turkish_upper).collect()
}

/// Uppercase the first character and lowercase the rest (Turkish rules).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(turkish_upper(first));
            out.extend(chars.map(turkish_lower));
            out
        }
    }
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != turkish_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != turkish_upper(c)
}
