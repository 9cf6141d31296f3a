// Criterion benchmarks for the breakdown engine.
//
// Run:
//   cargo bench --bench breakdown_bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tamara_rs::languages::french::GRAPHEMES;
use tamara_rs::segmenter::Segmenter;
use tamara_rs::{BreakdownEngine, BreakdownOptions};

const WORDS: &[&str] = &[
    "chat", "maison", "nation", "oiseau", "travail", "soleil", "fille", "bien", "parler",
    "tables", "enfant", "exemple", "grand-père", "l'ami", "question", "garçon", "chrome",
    "monsieur", "femme", "voyage",
];

const SENTENCE: &str = "le petit garçon regarde les oiseaux dans le jardin de sa grand-mère";

fn bench_segment(c: &mut Criterion) {
    let segmenter = Segmenter::new(GRAPHEMES);
    c.bench_function("segment_words", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(segmenter.segment(black_box(word)));
            }
        })
    });
}

fn bench_breakdown(c: &mut Criterion) {
    let engine = BreakdownEngine::new().unwrap();
    c.bench_function("breakdown_words", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(engine.breakdown_word(black_box(word)).unwrap());
            }
        })
    });

    c.bench_function("breakdown_sentence", |b| {
        b.iter(|| black_box(engine.breakdown(black_box(SENTENCE)).unwrap()))
    });

    let rules_only =
        BreakdownEngine::with_options(BreakdownOptions::default().with_lexicon(false)).unwrap();
    c.bench_function("breakdown_words_rules_only", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(rules_only.breakdown_word(black_box(word)).unwrap());
            }
        })
    });
}

fn bench_engine_construction(c: &mut Criterion) {
    c.bench_function("engine_new", |b| {
        b.iter(|| black_box(BreakdownEngine::new().unwrap()))
    });
}

criterion_group!(benches, bench_segment, bench_breakdown, bench_engine_construction);
criterion_main!(benches);
