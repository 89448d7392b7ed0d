mod game_state;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use game_state::{place_food, SnakeGameState, TickOutcome};
pub use session::SnakeGame;
pub use settings::{SnakeSettings, DEFAULT_CELL_COUNT, DEFAULT_CELL_SIZE, DEFAULT_TICK_INTERVAL};
pub use snake::{Segment, Snake};
pub use snapshot::GameSnapshot;
pub use types::{Bounds, Direction, GameStatus, Point};
