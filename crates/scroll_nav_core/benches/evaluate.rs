//! Scroll state evaluation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scroll_nav_core::{evaluate, ScrollNavOptions, ScrollSample, ScrollTracker};
use scroll_nav_platform::MetricsSnapshot;

fn bench_evaluate(c: &mut Criterion) {
    let config = ScrollNavOptions::new()
        .start_offset(64.0)
        .resolve(0.0)
        .expect("valid options");

    c.bench_function("evaluate_direction", |b| {
        let sample = ScrollSample {
            previous_offset: 480.0,
            current_offset: 512.0,
            viewport_extent: 900.0,
            document_extent: 12_000.0,
        };
        b.iter(|| evaluate(black_box(&sample), black_box(&config)))
    });

    c.bench_function("tracker_gesture_1000", |b| {
        b.iter(|| {
            let mut tracker = ScrollTracker::new(0.0);
            // Down then back up with momentum-like jitter
            for i in 0..1000u32 {
                let t = i as f64;
                let offset = if i < 500 { t * 6.0 } else { (1000.0 - t) * 6.0 } + (t % 3.0);
                black_box(tracker.update(MetricsSnapshot::new(offset, 900.0, 12_000.0), &config));
            }
        })
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
