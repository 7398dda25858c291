//! Golden tests: analyses and formatted output for a fixed lexicon.
//!
//! The fixture lives in `tests/data/golden.json`. Each word lists every
//! expected analysis in discovery order and the text each analysis formats
//! back to with `'` as the quote mark.

use std::path::PathBuf;

use serde::Deserialize;

use kelime_tr::TurkishMorphology;

#[derive(Debug, Deserialize)]
struct Golden {
    lexicon: Vec<String>,
    words: Vec<GoldenWord>,
}

#[derive(Debug, Deserialize)]
struct GoldenWord {
    input: String,
    analyses: Vec<String>,
    formatted: Option<String>,
}

fn load_golden() -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/golden.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_analyses() {
    let golden = load_golden();
    let morphology = TurkishMorphology::from_lines(&golden.lexicon).unwrap();

    let mut failures = Vec::new();
    for word in &golden.words {
        let actual: Vec<String> = morphology
            .analyze(&word.input)
            .iter()
            .map(|a| a.to_string())
            .collect();
        if actual != word.analyses {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                word.input, word.analyses, actual
            ));
        }
    }
    assert!(failures.is_empty(), "{} mismatches:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn golden_formatting() {
    let golden = load_golden();
    let morphology = TurkishMorphology::from_lines(&golden.lexicon).unwrap();

    for word in &golden.words {
        let analyses = morphology.analyze(&word.input);
        match &word.formatted {
            Some(expected) => {
                for analysis in &analyses {
                    assert_eq!(&morphology.format(analysis, "'"), expected, "{analysis}");
                }
            }
            None => assert!(analyses.is_empty(), "{}", word.input),
        }
    }
}

#[test]
fn golden_lexicon_size() {
    let golden = load_golden();
    let morphology = TurkishMorphology::from_lines(&golden.lexicon).unwrap();
    let entries = golden
        .lexicon
        .iter()
        .filter(|l| !l.trim().is_empty() && !l.starts_with("##"))
        .count();
    assert_eq!(morphology.lexicon().len(), entries);
}
