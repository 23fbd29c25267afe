use criterion::Throughput;
use inettime::*;
use std::time::SystemTime;
use time::macros::{date, datetime};

use criterion::Criterion;
use criterion::{criterion_group, criterion_main};

fn convert(c: &mut Criterion) {
    let instant = SystemTime::now();
    let date_time = datetime!(2025-10-12 05:37:51.9 -05:00);

    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(1));
    group.bench_function("from_instant", |b| {
        b.iter(|| InternetTime::from_instant(instant))
    });
    group.bench_function("from_offset_date_time", |b| {
        b.iter(|| InternetTime::from_offset_date_time(date_time))
    });
    group.bench_function("get_from/offset_date_time", |b| {
        b.iter(|| InternetTimeField::CentibeatOfDay.get_from(&date_time))
    });
    group.bench_function("now", |b| b.iter(InternetTime::now));
    group.finish();
}

fn format(c: &mut Criterion) {
    let it = InternetTime::of(date!(2025 - 12 - 31), 234, 56, InternetTime::OFFSET).unwrap();

    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(1));
    group.bench_function("beats/full", |b| {
        b.iter(|| it.format(beat_formatter(BeatStyle::Full)))
    });
    group.bench_function("offset_date_centibeats", |b| {
        b.iter(|| it.format(&OFFSET_DATE_CENTIBEATS))
    });
    group.finish();
}

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(1));
    group.bench_function("beats/full", |b| {
        b.iter(|| InternetTime::parse("@234.56", beat_formatter(BeatStyle::Full)))
    });
    group.bench_function("offset_date_centibeats", |b| {
        b.iter(|| InternetTime::parse("2026-01-02+12:00 @789.23", &OFFSET_DATE_CENTIBEATS))
    });
    group.finish();
}

criterion_group!(benches, convert, format, parse);
criterion_main!(benches);
