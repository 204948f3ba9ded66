use blocksweeper_core::{
    Board, Cell, CellHighlight, Coord2, GameConfig, GameSession, RandomMineGenerator, Renderer,
};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn draw_cell(&mut self, cell: &Cell, _: CellHighlight) {
        black_box(cell);
    }
}

const TIERS: [(&str, Coord2, u16); 3] = [
    ("default", (10, 10), 30),
    ("expert", (30, 16), 99),
    ("dense", (30, 16), 400),
];

fn first_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_click");
    for (name, size, mines) in TIERS {
        let config = GameConfig::new(size, 1, mines);
        let center = (size.0 / 2, size.1 / 2);
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut session = GameSession::new(RandomMineGenerator::new(0x5eed));
                    session.start_with_mines(config, mines).unwrap();
                    session
                },
                |mut session| session.handle_click(center, &mut NoopRenderer),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let board = Board::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    c.bench_function("flood_fill_255x255", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| board.reveal(black_box((0, 0))).unwrap(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, first_click, flood_fill);
criterion_main!(benches);
