//! Criterion benchmarks for Lexis phrase analysis and scoring.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lexis::analysis::lexeme::LexemeAnalyzer;
use lexis::similarity::{RatioScorer, score};

const PAIRS: &[(&str, &str)] = &[
    ("Малый пер.", "Малый пр."),
    ("Большой Козихинский пер.", "Большой Козихинский переулок"),
    ("пр. Серебрякова д. 14", "Серебрякова пр. д. 14"),
];

fn bench_analysis(c: &mut Criterion) {
    let analyzer = LexemeAnalyzer::default();

    c.bench_function("analyze_phrase", |b| {
        b.iter(|| {
            for (input, _) in PAIRS {
                black_box(analyzer.analyze(black_box(input)).unwrap());
            }
        })
    });
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = RatioScorer::default();
    let analyzed: Vec<_> = PAIRS
        .iter()
        .map(|(input, compare_with)| {
            let analyzer = scorer.analyzer();
            (
                analyzer.analyze(input).unwrap(),
                analyzer.analyze(compare_with).unwrap(),
            )
        })
        .collect();

    c.bench_function("score_tokens", |b| {
        b.iter(|| {
            for (input, compare_with) in &analyzed {
                black_box(score(black_box(input), black_box(compare_with)).unwrap());
            }
        })
    });

    c.bench_function("ratio_end_to_end", |b| {
        b.iter(|| {
            for (input, compare_with) in PAIRS {
                black_box(scorer.ratio(black_box(input), black_box(compare_with)).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_analysis, bench_scoring);
criterion_main!(benches);
