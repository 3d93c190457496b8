use criterion::{Criterion, criterion_group, criterion_main};
use demine_core::{Board, MineGrid};

fn flood_fill(c: &mut Criterion) {
    // worst case: one release opens the whole board
    let empty = MineGrid::from_mine_positions((256, 256), &[]).unwrap();

    c.bench_function("flood_fill_256x256_empty", |b| {
        b.iter(|| {
            let mut board = Board::with_layout(empty.clone());
            board.press((128, 128)).unwrap();
            board.release((128, 128)).unwrap();
            board
        })
    });
}

criterion_group!(benches, flood_fill);
criterion_main!(benches);
