// Criterion benchmarks for kelime-tr.
//
// Run:
//   cargo bench -p kelime-tr

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use kelime_tr::{CaseType, TurkishMorphology};

const LEXICON: &[&str] = &[
    "elma",
    "ev",
    "kitap",
    "hak [A:Doubling]",
    "burun [A:LastVowelDrop]",
    "Ankara",
    "Aydın",
    "Iphone [Pr:ayfon]",
    "Blah [A:NoQuote]",
    "gelmek",
    "gitmek [A:Voicing]",
    "demek",
    "başlamak",
];

const WORDS: &[&str] = &[
    "elmamdaki",
    "kitabımızsa",
    "kitaplarımızdan",
    "hakkı",
    "burnumuz",
    "evdekiler",
    "Ankara'dan",
    "ıphonumun",
    "geliyorum",
    "gideceğim",
    "diyecek",
    "başlıyorlar",
    "gelmez",
    "4'ten",
    "12,5ten",
    "bilinmeyen",
];

fn build() -> TurkishMorphology {
    TurkishMorphology::from_lines(LEXICON.iter().copied()).expect("lexicon")
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_morphology", |b| b.iter(|| black_box(build())));
}

fn bench_analyze_words(c: &mut Criterion) {
    let morphology = build();
    c.bench_function("analyze_words", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(morphology.analyze(black_box(word)));
            }
        })
    });
}

fn bench_format_words(c: &mut Criterion) {
    let morphology = build();
    let analyses: Vec<_> = WORDS
        .iter()
        .flat_map(|w| morphology.analyze(w))
        .collect();
    c.bench_function("format_to_case", |b| {
        b.iter(|| {
            for analysis in &analyses {
                black_box(morphology.format_to_case(analysis, CaseType::TitleCase, "'"));
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_analyze_words, bench_format_words);
criterion_main!(benches);
