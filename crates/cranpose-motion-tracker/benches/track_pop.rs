use cranpose_motion_tracker::{MotionEventTracker, StaleEventPolicy, TrackerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const PENDING_SAMPLES: &[usize] = &[0, 16, 256];

fn bench_track_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("track_pop");
    for &pending in PENDING_SAMPLES {
        group.bench_with_input(BenchmarkId::new("retain", pending), &pending, |b, &pending| {
            let tracker = MotionEventTracker::new();
            for seq in 0..pending {
                tracker.track(seq);
            }
            b.iter(|| {
                let id = tracker.track(black_box(usize::MAX));
                black_box(tracker.pop(id))
            });
        });
    }
    group.finish();
}

fn bench_discard_older(c: &mut Criterion) {
    c.bench_function("discard_older_every_fourth", |b| {
        let tracker = MotionEventTracker::with_config(
            TrackerConfig::new().with_stale_policy(StaleEventPolicy::DiscardOlder),
        );
        b.iter(|| {
            let mut last = None;
            for seq in 0..4u32 {
                last = Some(tracker.track(black_box(seq)));
            }
            black_box(last.and_then(|id| tracker.pop(id)))
        });
    });
}

criterion_group!(benches, bench_track_pop, bench_discard_older);
criterion_main!(benches);
