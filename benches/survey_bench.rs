//! Criterion benchmarks for page decoding and aggregation

use criterion::{criterion_group, criterion_main, Criterion};
use langpay::config::{HeadHunterConfig, SuperJobConfig};
use langpay::providers::{HeadHunter, SuperJob, VacancyProvider};
use langpay::services::predict_salary;
use langpay::types::LanguageStats;
use std::hint::black_box;

/// Build a HeadHunter page body with `count` vacancies
fn hh_body(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| match i % 4 {
            0 => r#"{"salary": {"from": 100000, "to": 200000, "currency": "RUR"}}"#.to_string(),
            1 => r#"{"salary": null}"#.to_string(),
            2 => r#"{"salary": {"from": 90000, "to": null, "currency": "RUR"}}"#.to_string(),
            _ => r#"{"salary": {"from": null, "to": 4000, "currency": "USD"}}"#.to_string(),
        })
        .collect();
    format!(
        r#"{{"items": [{}], "pages": 20, "found": 2000}}"#,
        items.join(",")
    )
}

fn bench_parse_page(c: &mut Criterion) {
    let hh = HeadHunter::new(HeadHunterConfig::default());
    let body = hh_body(100);
    c.bench_function("headhunter_parse_page_100", |b| {
        b.iter(|| hh.parse_page(black_box(&body), 0).unwrap())
    });

    let sj = SuperJob::new(SuperJobConfig {
        app_key: Some("bench".to_string()),
        ..SuperJobConfig::default()
    })
    .unwrap();
    let sj_body = include_str!("../tests/fixtures/sj_page.json");
    c.bench_function("superjob_parse_fixture", |b| {
        b.iter(|| sj.parse_page(black_box(sj_body), 0).unwrap())
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let estimates: Vec<f64> = (0..2000)
        .filter_map(|i| predict_salary(Some(50_000.0 + i as f64), None))
        .collect();
    c.bench_function("language_stats_2000", |b| {
        b.iter(|| LanguageStats::from_estimates(2000, black_box(&estimates)))
    });
}

criterion_group!(benches, bench_parse_page, bench_aggregate);
criterion_main!(benches);
