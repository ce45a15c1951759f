use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use parfact::{ProductMultiplier, WorkerPool, factorial_sequential, run_segmented_with};
use tokio::runtime::Builder;

fn strategy_bench(c: &mut Criterion) {
    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("build runtime");
    let concurrency = num_cpus::get();

    let mut group = c.benchmark_group("factorial");
    for n in [1_000_u64, 10_000, 50_000] {
        group.throughput(Throughput::Elements(n));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| factorial_sequential(black_box(n)).expect("sequential factorial"));
        });

        group.bench_with_input(BenchmarkId::new("ephemeral", n), &n, |b, &n| {
            b.to_async(&rt).iter(move || async move {
                run_segmented_with(black_box(n), concurrency, ProductMultiplier)
                    .await
                    .expect("ephemeral factorial")
            });
        });

        // The pool is prepared outside the measured region; only dispatch
        // and aggregation are timed.
        let pool = rt
            .block_on(WorkerPool::create(n, concurrency))
            .expect("create pool");
        group.bench_with_input(BenchmarkId::new("pool", n), &n, |b, &n| {
            let pool = &pool;
            b.to_async(&rt)
                .iter(move || async move { pool.run(black_box(n)).await.expect("pool factorial") });
        });
        rt.block_on(pool.shutdown()).expect("shutdown pool");
    }
    group.finish();
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
