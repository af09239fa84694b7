use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::{Arc, Barrier};
use std::thread;
use ticket_queue_rs::TicketQueue;

// Number of elements moved through the queue per iteration
const OPS_PER_BENCH: usize = 1_000_000;
// Attempt budget for the bounded variants
const ATTEMPTS: u16 = 4;

fn run(capacity: usize, threads: usize, bounded: bool) {
    let queue = Arc::new(TicketQueue::<u64>::new(capacity).unwrap());
    let barrier = Arc::new(Barrier::new(threads * 2));
    let per_thread = OPS_PER_BENCH / threads;

    let mut handles = Vec::with_capacity(threads * 2);

    // Producers
    for _ in 0..threads {
        let q = queue.clone();
        let b = barrier.clone();
        handles.push(thread::spawn(move || {
            b.wait();
            for i in 0..per_thread {
                let mut value = black_box(i as u64);
                if bounded {
                    while let Err(rejected) = q.try_push(value, ATTEMPTS) {
                        value = rejected.into_inner();
                        thread::yield_now();
                    }
                } else {
                    q.push(value);
                }
            }
        }));
    }

    // Consumers
    for _ in 0..threads {
        let q = queue.clone();
        let b = barrier.clone();
        handles.push(thread::spawn(move || {
            b.wait();
            for _ in 0..per_thread {
                if bounded {
                    loop {
                        if let Some(value) = q.try_pop(ATTEMPTS) {
                            black_box(value);
                            break;
                        }
                        thread::yield_now();
                    }
                } else {
                    black_box(q.pop());
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(OPS_PER_BENCH as u64));
    group.sample_size(10);

    for threads in [1, 2, 4] {
        // Skip configurations that would require more than available CPUs
        if threads * 2 > num_cpus::get() {
            continue;
        }

        for capacity in [4, 1024] {
            group.bench_with_input(
                BenchmarkId::new(format!("push_pop/cap{capacity}"), threads),
                &threads,
                |b, &threads| b.iter(|| run(capacity, threads, false)),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("try_push_try_pop/cap{capacity}"), threads),
                &threads,
                |b, &threads| b.iter(|| run(capacity, threads, true)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
