//! Benchmarks for rule matching and grammar parsing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use goldmatch::odds::{CanonicalOdds, OddsKey};
use goldmatch::prediction::Prediction;
use goldmatch::rules::{Importance, Rule, RuleMatcher};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

fn rule_table(size: u32) -> Vec<Rule> {
    (0..size)
        .map(|i| {
            // Primary targets spread over 2.00..4.00 in 0.02 steps
            let target = dec!(2.00) + Decimal::new(i as i64 * 2, 2);
            Rule {
                rule_id: i,
                name: format!("4-5 gol {target}"),
                primary_odds: BTreeMap::from([(OddsKey::Exact45, target)]),
                secondary_odds: (i % 3 == 0)
                    .then(|| BTreeMap::from([(OddsKey::Over25, dec!(1.23))])),
                exclude_odds: (i % 5 == 0)
                    .then(|| BTreeMap::from([(OddsKey::Under25, dec!(3.90))])),
                predictions: vec!["İY 0.5 ÜST".to_string(), "MS 2.5 ÜST".to_string()],
                confidence_base: 85 + (i % 10) as u8,
                importance: Importance::Normal,
                is_active: true,
            }
        })
        .collect()
}

fn benchmark_rule_table_scan(c: &mut Criterion) {
    let matcher = RuleMatcher::default();
    let table = rule_table(100);
    let odds = CanonicalOdds {
        exact_45: Some(dec!(2.50)),
        over_25: Some(dec!(1.24)),
        under_25: Some(dec!(3.60)),
        ..Default::default()
    };

    c.bench_function("rule_table_scan_100", |b| {
        b.iter(|| matcher.match_rules(black_box(&odds), black_box(&table)))
    });
}

fn benchmark_grammar_parse(c: &mut Criterion) {
    c.bench_function("grammar_parse", |b| {
        b.iter(|| Prediction::parse(black_box("İY EV 0.5 ÜST")))
    });
}

criterion_group!(benches, benchmark_rule_table_scan, benchmark_grammar_parse);
criterion_main!(benches);
