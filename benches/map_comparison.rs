use core::hash::BuildHasher;
use core::hash::Hash;
use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use robin_hood_map::RobinHoodMap;
use siphasher::sip::SipHasher;

/// Shared keyed SipHash so both maps pay the same hashing cost.
#[derive(Clone, Copy)]
struct SipHashBuilder {
    k1: u64,
    k2: u64,
}

impl SipHashBuilder {
    fn random() -> Self {
        let mut rng = OsRng;
        Self {
            k1: rng.try_next_u64().unwrap(),
            k2: rng.try_next_u64().unwrap(),
        }
    }
}

impl BuildHasher for SipHashBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new_with_keys(self.k1, self.k2)
    }
}

trait BenchKey: Hash + Eq + Clone {
    fn new(key: u64) -> Self;
}

#[derive(Clone, Hash, PartialEq, Eq)]
struct SmallKey(u64);

impl BenchKey for SmallKey {
    fn new(key: u64) -> Self {
        black_box(Self(key))
    }
}

#[derive(Clone, Hash, PartialEq, Eq)]
struct StringKey(String);

impl BenchKey for StringKey {
    fn new(key: u64) -> Self {
        black_box(Self(format!("key_{:016X}", key)))
    }
}

const SIZES: &[usize] = &[
    (1 << 8),
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    (1 << 18),
];

fn random_keys<K: BenchKey>(count: usize) -> Vec<K> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| K::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn robin_hood_with<K: BenchKey>(
    keys: &[K],
    hasher: SipHashBuilder,
) -> RobinHoodMap<K, u64, SipHashBuilder> {
    let mut map = RobinHoodMap::with_hasher(hasher);
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.clone(), i as u64);
    }
    map
}

fn hashbrown_with<K: BenchKey>(
    keys: &[K],
    hasher: SipHashBuilder,
) -> HashbrownMap<K, u64, SipHashBuilder> {
    let mut map = HashbrownMap::with_hasher(hasher);
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.clone(), i as u64);
    }
    map
}

fn bench_insert_random<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("insert_random_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let hasher = SipHashBuilder::random();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hood/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = RobinHoodMap::with_hasher(hasher);
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = HashbrownMap::with_hasher(hasher);
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let hasher = SipHashBuilder::random();
        let robin_hood = robin_hood_with(&keys, hasher);
        let hashbrown = hashbrown_with(&keys, hasher);
        let mut probes = keys.clone();
        probes.shuffle(&mut SmallRng::from_os_rng());
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hood/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(robin_hood.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(hashbrown.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_find_miss<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_miss_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let hasher = SipHashBuilder::random();
        let robin_hood = robin_hood_with(&keys, hasher);
        let hashbrown = hashbrown_with(&keys, hasher);
        let misses: Vec<K> = random_keys::<K>(size)
            .into_iter()
            .filter(|key| !robin_hood.contains_key(key))
            .collect();
        group.throughput(Throughput::Elements(misses.len() as u64));

        group.bench_function(format!("robin_hood/{size}"), |b| {
            b.iter(|| {
                for key in misses.iter() {
                    black_box(robin_hood.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in misses.iter() {
                    black_box(hashbrown.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let hasher = SipHashBuilder::random();
        let robin_hood = robin_hood_with(&keys, hasher);
        let hashbrown = hashbrown_with(&keys, hasher);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hood/{size}"), |b| {
            b.iter_batched(
                || robin_hood.clone(),
                |mut map| {
                    for key in keys.iter() {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || hashbrown.clone(),
                |mut map| {
                    for key in keys.iter() {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("iteration_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size);
        let hasher = SipHashBuilder::random();
        let robin_hood = robin_hood_with(&keys, hasher);
        let hashbrown = hashbrown_with(&keys, hasher);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hood/{size}"), |b| {
            b.iter(|| black_box(robin_hood.values().sum::<u64>()))
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| black_box(hashbrown.values().sum::<u64>()))
        });
    }

    group.finish();
}

#[derive(Clone, Copy)]
enum Op {
    Insert(usize),
    Find(usize),
    Remove(usize),
}

/// Zipf-skewed keys with an even insert/find/remove split over a key space
/// twice the target size.
fn zipf_ops(size: usize) -> Vec<Op> {
    let mut rng = SmallRng::from_os_rng();
    let key_distr = Zipf::new((size * 2) as f32, 1.0).unwrap();
    (0..size * 4)
        .map(|_| {
            let key = rng.sample(key_distr) as usize - 1;
            match rng.random_range(0..3) {
                0 => Op::Insert(key),
                1 => Op::Find(key),
                _ => Op::Remove(key),
            }
        })
        .collect()
}

fn bench_mixed_zipf<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("mixed_zipf_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(size * 2);
        let ops = zipf_ops(size);
        let hasher = SipHashBuilder::random();
        group.throughput(Throughput::Elements(ops.len() as u64));

        group.bench_function(format!("robin_hood/{size}"), |b| {
            b.iter(|| {
                let mut map = RobinHoodMap::with_hasher(hasher);
                for op in ops.iter() {
                    match *op {
                        Op::Insert(i) => black_box(map.insert(keys[i].clone(), i as u64)),
                        Op::Find(i) => black_box(map.contains_key(&keys[i])),
                        Op::Remove(i) => black_box(map.remove(&keys[i]).is_some()),
                    };
                }
                black_box(map)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut map = HashbrownMap::with_hasher(hasher);
                for op in ops.iter() {
                    match *op {
                        Op::Insert(i) => black_box(map.insert(keys[i].clone(), i as u64).is_none()),
                        Op::Find(i) => black_box(map.contains_key(&keys[i])),
                        Op::Remove(i) => black_box(map.remove(&keys[i]).is_some()),
                    };
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random::<SmallKey, 5>,
    bench_insert_random::<StringKey, 4>,
    bench_find_hit::<SmallKey, 5>,
    bench_find_hit::<StringKey, 4>,
    bench_find_miss::<SmallKey, 5>,
    bench_find_miss::<StringKey, 4>,
    bench_remove::<SmallKey, 5>,
    bench_remove::<StringKey, 4>,
    bench_iteration::<SmallKey, 5>,
    bench_iteration::<StringKey, 4>,
    bench_mixed_zipf::<SmallKey, 5>,
    bench_mixed_zipf::<StringKey, 4>,
);

criterion_main!(benches);
