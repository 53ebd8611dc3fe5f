//! Performance benchmarks for score analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use score_theory::{detect_key, Score};

fn bench_detect_key(c: &mut Criterion) {
    // Synthetic score: a C major scale cycled over a few thousand notes,
    // the size of a realistic full transcription.
    let scale = [60u8, 62, 64, 65, 67, 69, 71, 72];
    let pitches: Vec<u8> = scale.iter().cycle().take(5000).copied().collect();
    let score = Score::from_pitches(&pitches);

    c.bench_function("detect_key_5000_notes", |b| {
        b.iter(|| detect_key(black_box(&score)));
    });
}

criterion_group!(benches, bench_detect_key);
criterion_main!(benches);
