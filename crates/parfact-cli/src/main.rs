#![doc = include_str!("../README.md")]

use clap::Parser;
use parfact::{ProductMultiplier, WorkerPool, factorial_sequential, run_segmented_with};
use std::time::{Duration, Instant};

// Bignum multiplication is allocation-heavy; mimalloc holds up better under
// the contention of many workers allocating at once.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Compares three strategies for computing N!: one fresh worker per segment,
/// a reusable worker pool, and a plain sequential fold.
#[derive(Parser, Debug)]
#[command(name = "parfact", version, about)]
struct CliArgs {
    /// Number to compute the factorial of.
    #[arg(default_value_t = 10, env = "PARFACT_N")]
    n: u64,

    /// Number of concurrent workers (defaults to the CPU count).
    #[arg(short, long, env = "PARFACT_WORKERS")]
    workers: Option<usize>,

    /// Print the resulting factorial digits after the timings.
    #[arg(long)]
    print_result: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();
    let concurrency = args.workers.unwrap_or_else(num_cpus::get);
    tracing::info!("Computing {}! across {concurrency} workers", args.n);

    let start = Instant::now();
    let ephemeral = run_segmented_with(args.n, concurrency, ProductMultiplier).await?;
    let time_worker = start.elapsed();
    println!("Worker result done in: {}ms", time_worker.as_millis());

    // The pool is prepared outside the timed region; only dispatch and
    // aggregation are measured, mirroring the ephemeral strategy's scope.
    let pool = WorkerPool::create(args.n, concurrency).await?;
    let start = Instant::now();
    let pooled = pool.run(args.n).await?;
    let time_pool = start.elapsed();
    println!("Worker pool result done in: {}ms", time_pool.as_millis());

    let start = Instant::now();
    let sequential = factorial_sequential(args.n)?;
    let time_main = start.elapsed();
    println!("Main result done in: {}ms", time_main.as_millis());

    pool.shutdown().await?;

    anyhow::ensure!(
        ephemeral == pooled && pooled == sequential,
        "strategies disagreed on {}!",
        args.n
    );

    println!(
        "Difference between main and worker: {}ms",
        diff_ms(time_main, time_worker)
    );
    println!(
        "Difference between worker and pool: {}ms",
        diff_ms(time_worker, time_pool)
    );
    println!(
        "Difference between main and pool: {}ms",
        diff_ms(time_main, time_pool)
    );

    if args.print_result {
        println!("{sequential}");
    }

    Ok(())
}

fn diff_ms(a: Duration, b: Duration) -> i128 {
    a.as_millis() as i128 - b.as_millis() as i128
}
