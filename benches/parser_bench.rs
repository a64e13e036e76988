//! Microbenchmarks for the text normalization parsers
//!
//! The date and location parsers run once per staged biography row, so
//! their throughput dominates normalization time on full extracts.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use olympedia_processor::app::services::text_normalizer::{
    parse_date, parse_location, parse_rank,
};

const BORN_FRAGMENTS: &[&str] = &[
    "1 April 1871 in Stockholm, Sverige (SWE)",
    "24 May 1901 in Durban, Natal (RSA)",
    "circa 1923",
    "May 1881",
    "1879",
    "(1926 or 1927)",
    "date of birth not recorded",
];

const POS_FRAGMENTS: &[&str] = &["1", "=3", "7.0", "12", "DNF", "AC"];

fn bench_date_parser(c: &mut Criterion) {
    c.bench_function("parse_date", |b| {
        b.iter(|| {
            for fragment in BORN_FRAGMENTS {
                black_box(parse_date(black_box(fragment)));
            }
        })
    });
}

fn bench_location_parser(c: &mut Criterion) {
    c.bench_function("parse_location", |b| {
        b.iter(|| {
            for fragment in BORN_FRAGMENTS {
                black_box(parse_location(black_box(fragment)));
            }
        })
    });
}

fn bench_rank_parser(c: &mut Criterion) {
    c.bench_function("parse_rank", |b| {
        b.iter(|| {
            for fragment in POS_FRAGMENTS {
                black_box(parse_rank(black_box(fragment)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_date_parser,
    bench_location_parser,
    bench_rank_parser
);
criterion_main!(benches);
