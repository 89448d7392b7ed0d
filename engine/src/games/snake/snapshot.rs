use serde::Serialize;

use super::snake::Segment;
use super::types::{Bounds, Direction, GameStatus, Point};

/// Owned copy of the observable game state, handed to observers every tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub cell_size: u32,
    pub bounds: Bounds,
    pub status: GameStatus,
    pub direction: Direction,
    pub snake: Vec<Segment>,
    pub food: Point,
    pub score: u32,
    pub tick: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<&Segment> {
        self.snake.first()
    }
}
