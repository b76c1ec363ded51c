use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sevens::core::{Grid, GridSimulator, GroupPattern, Settings};
use sevens::cpu::{CpuBehaviour, SmartCpuBehaviour};
use sevens::types::{BlockType, Coord};

/// Half-filled board with a square group waiting at the top.
fn busy_grid(settings: &Settings) -> Grid {
    let mut grid = Grid::new(settings);
    let numbers = [2, 3, 5, 6, 1, 4, 3];
    for y in 0..6 {
        for x in 0..settings.grid_width {
            let n = numbers[((x + y * 3) % 7) as usize];
            if let Some(t) = BlockType::from_number(n) {
                let _ = grid.place_block(Coord::new(x, y), t);
            }
        }
    }
    grid.spawn_group(
        settings,
        &[BlockType::One, BlockType::Six, BlockType::Three, BlockType::Five],
        &GroupPattern::square(),
    );
    grid
}

fn bench_snapshot_and_score(c: &mut Criterion) {
    let settings = Settings::default();
    let grid = busy_grid(&settings);
    let mut sim = GridSimulator::new(settings);

    c.bench_function("snapshot_and_score", |b| {
        b.iter(|| {
            let _ = sim.snapshot_grid(black_box(&grid));
            black_box(sim.score_from_simulation());
        })
    });
}

fn bench_smart_do_action(c: &mut Criterion) {
    let settings = Settings::default();
    let grid = busy_grid(&settings);
    let mut cpu = SmartCpuBehaviour::new(settings);

    c.bench_function("smart_do_action", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            cpu.do_action(black_box(&mut g));
        })
    });
}

fn bench_rollback(c: &mut Criterion) {
    let settings = Settings::default();
    let grid = busy_grid(&settings);
    let mut sim = GridSimulator::new(settings);
    let _ = sim.snapshot_grid(&grid);

    c.bench_function("drop_delete_rollback", |b| {
        b.iter(|| {
            sim.drop_blocks();
            black_box(sim.delete_blocks());
            sim.rollback_to_snapshot();
        })
    });
}

criterion_group!(
    benches,
    bench_snapshot_and_score,
    bench_smart_do_action,
    bench_rollback
);
criterion_main!(benches);
