//! Steady-state accessor cost for each holder strategy.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cp_singleton::{Accessor, EagerHolder, InstanceHolder, LockedHolder, RacyHolder};

static ONCE: InstanceHolder<u64> = InstanceHolder::new(|| 7);
static LOCKED: LockedHolder<u64> = LockedHolder::new(|| 7);
static EAGER: EagerHolder<u64> = EagerHolder::new(7);
static RACY: RacyHolder<u64> = RacyHolder::new(|| 7);

fn read<H: Accessor<u64>>(holder: &H) -> u64 {
    *holder.get_instance()
}

fn bench_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_instance");
    group.bench_function("once", |b| b.iter(|| read(black_box(&ONCE))));
    group.bench_function("locked", |b| b.iter(|| read(black_box(&LOCKED))));
    group.bench_function("eager", |b| b.iter(|| read(black_box(&EAGER))));
    group.bench_function("racy", |b| b.iter(|| read(black_box(&RACY))));
    group.finish();
}

criterion_group!(benches, bench_accessors);
criterion_main!(benches);
