use criterion::{black_box, criterion_group, criterion_main, Criterion};
use barrio_match::{Classifier, Taxonomy, METRO_CUTOFF, SUBURBAN_CUTOFF};

fn bench_classification(c: &mut Criterion) {
    let taxonomy = Taxonomy::metropolitan().unwrap();
    let classifier = Classifier::new(&taxonomy).unwrap();

    c.bench_function("classify_exact_alias", |b| {
        b.iter(|| black_box(classifier.classify(Some("palermo"), METRO_CUTOFF)));
    });

    c.bench_function("classify_noisy_answer", |b| {
        b.iter(|| {
            black_box(classifier.classify(
                Some("vivo en la zona de floresta cerca de la estacion"),
                METRO_CUTOFF,
            ))
        });
    });

    c.bench_function("classify_no_match", |b| {
        b.iter(|| black_box(classifier.classify(Some("xyzabc123"), METRO_CUTOFF)));
    });
}

fn bench_batch(c: &mut Criterion) {
    let taxonomy = Taxonomy::metropolitan().unwrap();
    let suburban = Classifier::new(&taxonomy.suburban().unwrap()).unwrap();

    let answers: Vec<Option<String>> = (0..500)
        .map(|i| match i % 4 {
            0 => Some("lomas de zamora".to_string()),
            1 => Some(format!("vivo en quilmes hace {} anos", i)),
            2 => Some("zzz sin clasificar".to_string()),
            _ => None,
        })
        .collect();
    let refs: Vec<Option<&str>> = answers.iter().map(|a| a.as_deref()).collect();

    c.bench_function("classify_batch_500", |b| {
        b.iter(|| black_box(suburban.classify_batch(&refs, SUBURBAN_CUTOFF)));
    });
}

criterion_group!(benches, bench_classification, bench_batch);
criterion_main!(benches);
