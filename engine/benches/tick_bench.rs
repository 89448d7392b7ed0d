use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use snake_engine::games::SessionRng;
use snake_engine::games::snake::{
    place_food, Direction, GameStatus, Point, Segment, Snake, SnakeGameState, SnakeSettings,
};

/// Serpentine snake covering every row but the last, leaving `cell_count` free cells.
fn crowded_snake(cell_size: u32, cell_count: u32) -> Snake {
    let mut segments = Vec::new();
    for row in (0..cell_count - 1).rev() {
        let heading = if row % 2 == 0 { Direction::Right } else { Direction::Left };
        let columns: Vec<u32> = if row % 2 == 0 {
            (0..cell_count).rev().collect()
        } else {
            (0..cell_count).collect()
        };
        for column in columns {
            segments.push(Segment::new(Point::new(column * cell_size, row * cell_size), heading));
        }
    }
    Snake::from_segments(segments).expect("board has at least one row")
}

fn bench_place_food_on_crowded_board(c: &mut Criterion) {
    let snake = crowded_snake(10, 30);
    let mut rng = SessionRng::new(7);

    c.bench_function("place_food 30x30 with one free row", |b| {
        b.iter(|| black_box(place_food(&snake, 10, 30, &mut rng)))
    });
}

fn bench_straight_ticks(c: &mut Criterion) {
    let settings = SnakeSettings::new(10, 30).with_seed(7);

    c.bench_function("100 ticks on an empty board", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(7);
            let mut state = SnakeGameState::new(&settings, &mut rng).expect("30x30 board has room for food");
            state.status = GameStatus::Started;
            for _ in 0..100 {
                black_box(state.update(&mut rng));
            }
            state.score
        })
    });
}

criterion_group!(benches, bench_place_food_on_crowded_board, bench_straight_ticks);
criterion_main!(benches);
