//! Shared types for Turkish morphological analysis.
//!
//! - [`character`] -- Turkish letter classes and Turkish-aware case mapping
//! - [`case`] -- case-type guessing and case transforms
//! - [`enums`] -- part-of-speech and root attribute enumerations
//! - [`dictionary`] -- dictionary items, entry-definition parsing, root lexicon
//! - [`analysis`] -- morphemes and analysis results

pub mod analysis;
pub mod case;
pub mod character;
pub mod dictionary;
pub mod enums;
