// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use view_counter::config::structs::configuration::Configuration;
use view_counter::tracker::structs::view_tracker::ViewTracker;

fn visitor_ip(i: usize) -> String {
    format!("10.{}.{}.{}", (i >> 16) & 0xff, (i >> 8) & 0xff, i & 0xff)
}

fn create_tracker() -> Arc<ViewTracker> {
    Arc::new(ViewTracker::new(Arc::new(Configuration::default())))
}

fn populate(tracker: &ViewTracker, pages: usize, visitors: usize) {
    for i in 0..visitors {
        tracker.record_view(&visitor_ip(i), &format!("page-{}", i % pages));
    }
}

fn bench_record_view(c: &mut Criterion) {
    let tracker = create_tracker();

    c.bench_function("record_view_repeat_visitor", |b| {
        b.iter(|| {
            tracker.record_view(black_box("1.2.3.4"), black_box("home"));
        });
    });

    let mut i = 0usize;
    c.bench_function("record_view_new_visitor", |b| {
        b.iter(|| {
            i += 1;
            tracker.record_view(&visitor_ip(i), black_box("home"));
        });
    });
}

fn bench_concurrent_views(c: &mut Criterion) {
    c.bench_function("concurrent_8x1000_views", |b| {
        b.iter(|| {
            let tracker = create_tracker();
            let handles: Vec<_> = (0..8).map(|t| {
                let tracker = tracker.clone();
                thread::spawn(move || {
                    for i in 0..1000 {
                        tracker.record_view(&visitor_ip(t * 1000 + i), "home");
                    }
                })
            }).collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });
}

fn bench_take_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("take_snapshot");

    for visitors in [100, 10_000, 100_000].iter() {
        let tracker = create_tracker();
        populate(&tracker, 50, *visitors);
        group.bench_with_input(BenchmarkId::from_parameter(visitors), visitors, |b, _| {
            b.iter(|| {
                black_box(tracker.take_snapshot());
            });
        });
    }

    group.finish();
}

fn bench_encode_snapshot(c: &mut Criterion) {
    let tracker = create_tracker();
    populate(&tracker, 50, 10_000);
    let (pages, visitors) = tracker.take_snapshot();

    let mut group = c.benchmark_group("encode_snapshot");
    group.bench_function("pages", |b| {
        b.iter(|| {
            black_box(pages.encode().unwrap());
        });
    });
    group.bench_function("visitors_10000", |b| {
        b.iter(|| {
            black_box(visitors.encode().unwrap());
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_record_view,
    bench_concurrent_views,
    bench_take_snapshot,
    bench_encode_snapshot,
);
criterion_main!(benches);
