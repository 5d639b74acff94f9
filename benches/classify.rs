use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sentiboard::dataset::Dataset;
use sentiboard::sentiment::{Classifier, LexiconAnalyzer};

const REVIEW_COUNT: usize = 1_000;

const PHRASES: &[&str] = &[
    "great product, would buy again",
    "terrible experience with support",
    "it's fine",
    "NOT good at all, broke after a week!!",
    "I love it but the lid is flimsy",
    "absolutely amazing blender",
];

fn reviews() -> Vec<String> {
    (0..REVIEW_COUNT)
        .map(|i| format!("{} #{}", PHRASES[i % PHRASES.len()], i % 50))
        .collect()
}

fn bench_polarity(c: &mut Criterion) {
    let analyzer = LexiconAnalyzer::default();
    let texts = reviews();
    c.bench_with_input(BenchmarkId::new("polarity", REVIEW_COUNT), &texts, |b, texts| {
        b.iter(|| {
            for text in texts {
                black_box(analyzer.polarity(black_box(text)));
            }
        });
    });
}

fn bench_label_dataset(c: &mut Criterion) {
    let texts = reviews();
    let mut group = c.benchmark_group("label_dataset");
    for capacity in [0usize, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            b.iter(|| {
                let mut dataset =
                    Dataset::from_reviews(texts.iter().map(|text| ("P", Some(text.as_str()))));
                let mut classifier = Classifier::lexicon(capacity);
                dataset.label_rows(|_, summary| classifier.classify(summary).label);
                black_box(dataset);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polarity, bench_label_dataset);
criterion_main!(benches);
