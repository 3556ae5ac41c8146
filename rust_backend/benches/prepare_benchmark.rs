use chrono::NaiveDate;
use cii_rust::core::domain::CrimeIncident;
use cii_rust::preprocessing::PreparePipeline;
use cii_rust::services::{
    compute_correlation_matrix, compute_monthly_counts, top_crime_types, DEFAULT_TOP_N,
};
use cii_rust::time::{hour_from_clock, pad_clock};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polars::prelude::*;

const AREAS: [&str; 4] = ["Central", "Hollywood", "Harbor", "Rampart"];
const CRIMES: [&str; 5] = ["ROBBERY", "BURGLARY", "ASSAULT", "VANDALISM", "THEFT"];
const STATUSES: [&str; 3] = ["Invest Cont", "Adult Arrest", "Juv Arrest"];

fn raw_frame(rows: usize) -> DataFrame {
    let mut date_occ = Vec::with_capacity(rows);
    let mut date_rptd = Vec::with_capacity(rows);
    let mut time_occ = Vec::with_capacity(rows);
    let mut lat = Vec::with_capacity(rows);
    let mut lon = Vec::with_capacity(rows);
    let mut area = Vec::with_capacity(rows);
    let mut crime = Vec::with_capacity(rows);
    let mut weapon = Vec::with_capacity(rows);
    let mut age = Vec::with_capacity(rows);
    let mut sex = Vec::with_capacity(rows);
    let mut descent = Vec::with_capacity(rows);
    let mut status = Vec::with_capacity(rows);

    for i in 0..rows {
        let month = (i % 12) + 1;
        let day = (i % 28) + 1;
        date_occ.push(format!("{:02}/{:02}/2021 12:00:00 AM", month, day));
        date_rptd.push(format!("{:02}/{:02}/2021 12:00:00 AM", month, day));
        time_occ.push(((i % 24) * 100 + i % 60) as i64);
        lat.push(34.0 + (i % 100) as f64 * 0.001);
        lon.push(-118.5 + (i % 100) as f64 * 0.001);
        area.push(AREAS[i % AREAS.len()]);
        crime.push(CRIMES[i % CRIMES.len()]);
        weapon.push(if i % 3 == 0 { Some("HAND GUN") } else { None });
        age.push((18 + i % 60) as i64);
        sex.push(["M", "F", "X"][i % 3]);
        descent.push(["H", "W", "B"][i % 3]);
        status.push(STATUSES[i % STATUSES.len()]);
    }

    DataFrame::new(vec![
        Column::new("Date Occ".into(), date_occ),
        Column::new("Date Rptd".into(), date_rptd),
        Column::new("Time Occ".into(), time_occ),
        Column::new("Lat".into(), lat),
        Column::new("Lon".into(), lon),
        Column::new("Area Name".into(), area),
        Column::new("Crm Cd Desc".into(), crime),
        Column::new("Weapon Desc".into(), weapon),
        Column::new("Vict Age".into(), age),
        Column::new("Vict Sex".into(), sex),
        Column::new("Vict Descent".into(), descent),
        Column::new("Status Desc".into(), status),
    ])
    .unwrap()
}

fn records(rows: usize) -> Vec<CrimeIncident> {
    (0..rows)
        .map(|i| {
            let year = 2020 + (i % 3) as i32;
            let month = (i % 12) as u32 + 1;
            let hour = (i % 24) as u32;
            CrimeIncident {
                date_occurred: NaiveDate::from_ymd_opt(year, month, 1),
                date_reported: NaiveDate::from_ymd_opt(year, month, 2),
                time_occurred: Some(format!("{:02}15", hour)),
                hour: Some(hour),
                year: Some(year),
                month: Some(month),
                area_name: Some(AREAS[i % AREAS.len()].to_string()),
                crime_description: Some(CRIMES[i % CRIMES.len()].to_string()),
                weapon_description: if i % 3 == 0 {
                    Some("HAND GUN".to_string())
                } else {
                    None
                },
                victim_age: Some((18 + i % 60) as f64),
                victim_sex: Some(["M", "F", "X"][i % 3].to_string()),
                victim_descent: Some(["H", "W", "B"][i % 3].to_string()),
                status_description: Some(STATUSES[i % STATUSES.len()].to_string()),
                latitude: 34.0 + (i % 100) as f64 * 0.001,
                longitude: -118.5 - (i % 100) as f64 * 0.001,
            }
        })
        .collect()
}

fn bench_clock_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_processing");

    let clocks: Vec<String> = (0..1000).map(|i| (i % 2400).to_string()).collect();
    group.bench_function("pad_and_derive_hour", |b| {
        b.iter(|| {
            for raw in &clocks {
                let clock = pad_clock(black_box(raw));
                black_box(hour_from_clock(&clock));
            }
        });
    });

    group.finish();
}

fn bench_pipeline_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_prepare");

    let pipeline = PreparePipeline::new();
    for size in [100usize, 1000, 5000] {
        let frame = raw_frame(size);
        group.bench_with_input(
            BenchmarkId::new("process_dataframe", size),
            &frame,
            |b, frame| {
                b.iter(|| pipeline.process_dataframe(black_box(frame.clone())));
            },
        );
    }

    group.finish();
}

fn bench_view_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_computation");

    let incidents = records(5000);
    group.bench_function("monthly_counts", |b| {
        b.iter(|| compute_monthly_counts(black_box(&incidents)));
    });

    group.bench_function("top_crime_types", |b| {
        b.iter(|| top_crime_types(black_box(&incidents), DEFAULT_TOP_N));
    });

    group.bench_function("correlation_matrix", |b| {
        b.iter(|| compute_correlation_matrix(black_box(&incidents)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_clock_processing,
    bench_pipeline_prepare,
    bench_view_computation
);
criterion_main!(benches);
