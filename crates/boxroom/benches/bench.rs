use boxroom::{
    Container, ContainerId, IdAllocator, IdentifierSource, KindTag, MemoryStore, Record,
    Repository, SeededRandom, Store, StoreOracle, ThreadRandom,
};
use core::hint::black_box;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::collections::HashSet;

// Number of ids allocated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

/// Allocation against a sparse store: practically every draw is free.
fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate/sparse");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let store = MemoryStore::new();
    let allocator = IdAllocator::<Container, _>::new(ThreadRandom);
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            let oracle = StoreOracle::<_, Container>::new(&store);
            for _ in 0..TOTAL_IDS {
                black_box(allocator.next_id(&oracle));
            }
        });
    });

    group.finish();
}

/// Allocation where three quarters of a narrow id range are taken, so each
/// call retries several times on average.
fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate/dense");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let range = (TOTAL_IDS * 4) as u64;
    let taken: HashSet<u64> = (0..range).filter(|v| v % 4 != 0).collect();
    let rng = SeededRandom::new(7);
    let allocator = IdAllocator::<Container, _>::new(move || rng.generate() % range);

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(allocator.next_id(&taken));
            }
        });
    });

    group.finish();
}

/// Full create path through the repository, store growing as it goes.
fn bench_repository(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository/create_container");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_batched(
            || {
                let seeded = (0..TOTAL_IDS as u64)
                    .map(|raw| Record::from(Container::new(ContainerId::from_raw(raw), "seed")));
                Repository::new(MemoryStore::with_records(seeded), ThreadRandom)
            },
            |mut repo| {
                for _ in 0..TOTAL_IDS {
                    black_box(repo.create_container("bench").unwrap());
                }
                black_box(repo.store().all(KindTag::Container).unwrap().len())
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_sparse, bench_dense, bench_repository);
criterion_main!(benches);
