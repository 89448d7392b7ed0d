use std::collections::HashSet;

use crate::games::SessionRng;
use crate::{log, log_debug};
use super::settings::SnakeSettings;
use super::snake::{Segment, Snake};
use super::snapshot::GameSnapshot;
use super::types::{Bounds, Direction, GameStatus, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    /// The run is over, by collision or because the board filled up.
    pub died: bool,
    pub board_full: bool,
}

/// The whole simulation for one play session. Synchronous and timer-free; the
/// session decides when `update` runs.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub status: GameStatus,
    pub direction: Direction,
    pub snake: Snake,
    pub food: Point,
    pub score: u32,
    pub tick: u64,
    cell_size: u32,
    cell_count: u32,
}

impl SnakeGameState {
    /// Fresh board: one segment at the origin heading right, food on a free cell.
    /// `settings` must already be validated.
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Result<Self, String> {
        let direction = Direction::Right;
        let snake = Snake::new(Point::new(0, 0), direction);
        let food = place_food(&snake, settings.cell_size, settings.cell_count, rng).ok_or_else(|| {
            format!("no free cell for food on a {0}x{0} board", settings.cell_count)
        })?;

        Ok(Self {
            status: GameStatus::Stopped,
            direction,
            snake,
            food,
            score: 0,
            tick: 0,
            cell_size: settings.cell_size,
            cell_count: settings.cell_count,
        })
    }

    /// Builds a stopped game from an explicit layout. The current direction is
    /// taken from the head segment.
    pub fn with_layout(settings: &SnakeSettings, snake: Snake, food: Point) -> Result<Self, String> {
        let state = Self {
            status: GameStatus::Stopped,
            direction: snake.head().direction,
            snake,
            food,
            score: 0,
            tick: 0,
            cell_size: settings.cell_size,
            cell_count: settings.cell_count,
        };

        for segment in state.snake.segments() {
            if !state.is_on_grid(segment.position) {
                return Err(format!(
                    "segment at ({}, {}) is not on the grid",
                    segment.position.x, segment.position.y
                ));
            }
        }
        if !state.is_on_grid(food) {
            return Err(format!("food at ({}, {}) is not on the grid", food.x, food.y));
        }
        if state.snake.occupies(food) {
            return Err(format!("food at ({}, {}) overlaps the snake", food.x, food.y));
        }

        Ok(state)
    }

    pub fn bounds(&self) -> Bounds {
        let extent = self.cell_size * self.cell_count;
        Bounds {
            width: extent,
            height: extent,
        }
    }

    fn is_on_grid(&self, point: Point) -> bool {
        let extent = self.cell_size * self.cell_count;
        point.x < extent
            && point.y < extent
            && point.x % self.cell_size == 0
            && point.y % self.cell_size == 0
    }

    /// Accepts a new heading only while the game runs and only if it is not a
    /// straight reversal. Returns whether the heading was taken.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Started {
            return false;
        }
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// One cell away from `point` in `direction`, wrapping around the board.
    pub fn neighbour(&self, point: Point, direction: Direction) -> Point {
        let extent = i64::from(self.cell_size) * i64::from(self.cell_count);
        let step = i64::from(self.cell_size);
        let (dx, dy) = direction.delta();

        let x = (i64::from(point.x) + dx * step).rem_euclid(extent);
        let y = (i64::from(point.y) + dy * step).rem_euclid(extent);
        // both in 0..extent, and extent fits in u32
        Point::new(x as u32, y as u32)
    }

    /// Advances the simulation by one tick. Does nothing unless started.
    ///
    /// Order: move, eat (grow and relocate food), then check the head against
    /// every other post-move segment. A collision flips the status to `Died`
    /// before the caller publishes the tick.
    ///
    /// Growing into the last free cell also ends the run as `Died`. The food
    /// then stays where it was eaten, under the head, since no cell is left
    /// to move it to.
    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Started {
            return TickOutcome::default();
        }

        let head = self.snake.head();
        let next_head = Segment::new(self.neighbour(head.position, self.direction), self.direction);
        self.snake.advance(next_head);
        self.tick += 1;

        let ate_food = next_head.position == self.food;
        if ate_food {
            self.score += 1;
            let tail = self.snake.tail();
            let new_tail = Segment::new(
                self.neighbour(tail.position, tail.direction.opposite()),
                tail.direction,
            );
            self.snake.grow(new_tail);

            let Some(food) = place_food(&self.snake, self.cell_size, self.cell_count, rng) else {
                self.status = GameStatus::Died;
                log!(
                    "Snake filled the board on tick {}. Final score: {}",
                    self.tick,
                    self.score
                );
                return TickOutcome {
                    ate_food,
                    died: true,
                    board_full: true,
                };
            };
            self.food = food;
            log_debug!(
                "Food eaten at ({}, {}). Score: {}. Next food at ({}, {})",
                next_head.position.x,
                next_head.position.y,
                self.score,
                self.food.x,
                self.food.y
            );
        }

        let died = self.snake.head_hits_body();
        if died {
            self.status = GameStatus::Died;
            log!(
                "Snake ran into itself at ({}, {}) on tick {}. Final score: {}",
                next_head.position.x,
                next_head.position.y,
                self.tick,
                self.score
            );
        }

        TickOutcome {
            ate_food,
            died,
            board_full: false,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cell_size: self.cell_size,
            bounds: self.bounds(),
            status: self.status,
            direction: self.direction,
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            tick: self.tick,
        }
    }
}

/// Rejection sampling over the whole board until a cell off the snake turns up.
/// `None` when the snake covers every cell.
pub fn place_food(
    snake: &Snake,
    cell_size: u32,
    cell_count: u32,
    rng: &mut SessionRng,
) -> Option<Point> {
    let occupied: HashSet<Point> = snake.segments().map(|segment| segment.position).collect();
    let total_cells = u64::from(cell_count) * u64::from(cell_count);
    if occupied.len() as u64 >= total_cells {
        return None;
    }

    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let candidate = Point::new(rng.index(cell_count) * cell_size, rng.index(cell_count) * cell_size);
        if !occupied.contains(&candidate) {
            if attempts > 1 {
                log_debug!("Food placement took {} attempts", attempts);
            }
            return Some(candidate);
        }
    }
}
