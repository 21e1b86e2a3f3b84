use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

use rollcall_validation::{AnswerValidator, MentionExtractor, QueryAnswer, ValidationEngine};

/// A class roster of `n` students plus a narrative naming every other one.
fn build_class(n: usize) -> (String, Value) {
    let students: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "firstName": format!("Stu{}", letters(i)),
                "lastName": format!("Dent{}", letters(i)),
                "studentId": format!("S{i}"),
                "attendanceRate": 90.0,
                "absences": ["2024-03-05"]
            })
        })
        .collect();
    let narrative = (0..n)
        .step_by(2)
        .map(|i| format!("Stu{} Dent{} (S{i}) was absent on 2024-03-05.", letters(i), letters(i)))
        .collect::<Vec<_>>()
        .join(" ");
    (narrative, json!({ "students": students }))
}

/// Name tokens must end in a lowercase letter, so encode the index as letters.
fn letters(mut i: usize) -> String {
    let mut out = String::new();
    loop {
        out.push((b'a' + (i % 26) as u8) as char);
        i /= 26;
        if i == 0 {
            break;
        }
    }
    out
}

fn bench_extraction(c: &mut Criterion) {
    let (narrative, _) = build_class(200);
    let extractor = MentionExtractor::default();
    c.bench_function("extract_100_mentions", |b| {
        b.iter(|| extractor.extract(&narrative));
    });
}

fn bench_validate(c: &mut Criterion) {
    let engine = ValidationEngine::default();
    let mut group = c.benchmark_group("validate_and_fix");
    for n in [10usize, 100, 1000] {
        let (narrative, data) = build_class(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| engine.validate_and_fix(&narrative, &data));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let validator = AnswerValidator::default();
    let answers: Vec<QueryAnswer> = (0..64)
        .map(|_| {
            let (narrative, data) = build_class(50);
            QueryAnswer::new(narrative, data)
        })
        .collect();
    c.bench_function("validate_batch_64x50", |b| {
        b.iter(|| validator.validate_batch(&answers));
    });
}

criterion_group!(benches, bench_extraction, bench_validate, bench_batch);
criterion_main!(benches);
