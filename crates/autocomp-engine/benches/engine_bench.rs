// Criterion benchmarks for autocomp-engine.
//
// Uses a synthetic vocabulary so no external word list is needed. Set
// AUTOCOMP_WORDS to a word-list file to benchmark against real data.
//
// Run:
//   cargo bench -p autocomp-engine
//   AUTOCOMP_WORDS=/usr/share/dict/words cargo bench -p autocomp-engine

use std::hint::black_box;

use autocomp_engine::{Alphabet, SuggestionEngine};
use criterion::{Criterion, criterion_group, criterion_main};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Deterministic pseudo-words: every 3-letter stem from a small alphabet
/// with a handful of suffixes.
fn synthetic_words() -> Vec<String> {
    let letters = ['a', 'e', 'i', 'o', 'r', 's', 't', 'n'];
    let suffixes = ["", "s", "ed", "ing", "er"];
    let mut words = Vec::new();
    for &a in &letters {
        for &b in &letters {
            for &c in &letters {
                for suffix in suffixes {
                    words.push(format!("{a}{b}{c}{suffix}"));
                }
            }
        }
    }
    words
}

fn build_engine() -> SuggestionEngine {
    if let Ok(path) = std::env::var("AUTOCOMP_WORDS") {
        match std::fs::File::open(&path) {
            Ok(file) => {
                // Real word lists contain capitals and punctuation.
                let mut engine = SuggestionEngine::new(Alphabet::Unicode);
                if engine.load_words(std::io::BufReader::new(file)).is_ok() {
                    return engine;
                }
                eprintln!("[engine_bench] could not load {path}, using synthetic words");
            }
            Err(e) => eprintln!("[engine_bench] cannot open {path}: {e}, using synthetic words"),
        }
    }
    SuggestionEngine::from_words(Alphabet::Lowercase, synthetic_words())
        .expect("synthetic words are lowercase")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Direct prefix hits, including frequency reinforcement.
fn bench_direct(c: &mut Criterion) {
    let mut engine = build_engine();
    c.bench_function("suggest_direct", |b| {
        b.iter(|| {
            for prefix in ["ar", "sta", "tin", "o"] {
                black_box(engine.suggest(black_box(prefix)));
            }
        })
    });
}

/// Fallback path: misspelled prefixes that need swaps or substitutions.
fn bench_fallback(c: &mut Criterion) {
    let engine = build_engine();
    c.bench_function("suggest_fallback", |b| {
        b.iter(|| {
            for prefix in ["sxa", "tsarting", "ezzz", "nqqqqq"] {
                black_box(engine.suggest_fallback(black_box(prefix)));
            }
        })
    });
}

/// Bulk loading of the vocabulary.
fn bench_build(c: &mut Criterion) {
    let words = synthetic_words();
    c.bench_function("build_vocabulary", |b| {
        b.iter(|| {
            let engine = SuggestionEngine::from_words(Alphabet::Lowercase, black_box(&words))
                .expect("synthetic words are lowercase");
            black_box(engine);
        })
    });
}

criterion_group!(benches, bench_direct, bench_fallback, bench_build);
criterion_main!(benches);
