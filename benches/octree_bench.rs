//! 八叉树性能基准测试
//!
//! 数据模拟一个 20000 x 20000 的世界里分布的站台区域：
//! 每个区域宽 3~5 格、长 8~24 格、高 3 格。

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use railarea::{Point3D, Range3D, RangeOctree};

const BENCHMARK_SIZE: usize = 10_000;
const WORLD_HALF: i32 = 10_000;

/// 性能测试配置
struct BenchConfig {
    size: usize,
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: BENCHMARK_SIZE,
            seed: 42,
        }
    }
}

fn world_bound() -> Range3D {
    Range3D::new(-WORLD_HALF, -64, -WORLD_HALF, WORLD_HALF, 320, WORLD_HALF)
}

/// 生成站台区域
fn generate_platforms(count: usize, seed: u64) -> Vec<Range3D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-WORLD_HALF..WORLD_HALF - 32);
            let y = rng.gen_range(0..200);
            let z = rng.gen_range(-WORLD_HALF..WORLD_HALF - 32);
            let (dx, dz) = if rng.gen_bool(0.5) {
                (rng.gen_range(2..5), rng.gen_range(7..24))
            } else {
                (rng.gen_range(7..24), rng.gen_range(2..5))
            };
            Range3D::new(x, y, z, x + dx, y + 2, z + dz)
        })
        .collect()
}

/// 生成查询点，一半落在站台内
fn generate_points(platforms: &[Range3D], count: usize, seed: u64) -> Vec<Point3D> {
    let mut rng = StdRng::seed_from_u64(seed + 1000);
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                platforms[rng.gen_range(0..platforms.len())].center()
            } else {
                Point3D::new(
                    rng.gen_range(-WORLD_HALF..WORLD_HALF),
                    rng.gen_range(-64..320),
                    rng.gen_range(-WORLD_HALF..WORLD_HALF),
                )
            }
        })
        .collect()
}

fn build(platforms: &[Range3D]) -> RangeOctree {
    let mut octree = RangeOctree::new(world_bound());
    for range in platforms {
        octree.insert(*range);
    }
    octree
}

/// 插入性能测试
fn bench_insert(c: &mut Criterion) {
    let config = BenchConfig::default();
    let platforms = generate_platforms(config.size, config.seed);

    c.bench_function("insert", |b| b.iter(|| build(black_box(&platforms))));
}

/// 点查询性能测试
fn bench_first_range(c: &mut Criterion) {
    let config = BenchConfig::default();
    let platforms = generate_platforms(config.size, config.seed);
    let points = generate_points(&platforms, 1_000, config.seed);
    let octree = build(&platforms);

    c.bench_function("first_range", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| octree.first_range(black_box(p)).is_some())
                .count()
        })
    });

    c.bench_function("ranges", |b| {
        b.iter(|| {
            points
                .iter()
                .map(|p| octree.ranges(black_box(p)).len())
                .sum::<usize>()
        })
    });
}

/// 区块相交查询性能测试
fn bench_intersecting(c: &mut Criterion) {
    let config = BenchConfig::default();
    let platforms = generate_platforms(config.size, config.seed);
    let octree = build(&platforms);
    let mut rng = StdRng::seed_from_u64(config.seed + 2000);
    let chunks: Vec<Range3D> = (0..1_000)
        .map(|_| {
            let cx = rng.gen_range(-WORLD_HALF / 16..WORLD_HALF / 16);
            let cz = rng.gen_range(-WORLD_HALF / 16..WORLD_HALF / 16);
            Range3D::new(cx * 16, -64, cz * 16, cx * 16 + 15, 320, cz * 16 + 15)
        })
        .collect();

    c.bench_function("intersecting_chunk", |b| {
        b.iter(|| {
            chunks
                .iter()
                .filter(|chunk| !octree.intersecting(black_box(chunk)).is_empty())
                .count()
        })
    });
}

/// 删除性能测试（包含合并）
fn bench_remove(c: &mut Criterion) {
    let config = BenchConfig::default();
    let platforms = generate_platforms(config.size, config.seed);
    let octree = build(&platforms);

    c.bench_function("remove_all", |b| {
        b.iter_batched(
            || octree.clone(),
            |mut octree| {
                for range in &platforms {
                    octree.remove(range);
                }
                octree
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_first_range,
    bench_intersecting,
    bench_remove
);
criterion_main!(benches);
