use snake_engine::games::snake::{GameSnapshot, GameStatus};

const EMPTY_CHAR: char = '.';
const BODY_CHAR: char = 'o';
const HEAD_CHAR: char = '@';
const FOOD_CHAR: char = '*';

pub fn instructions(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Started => "Press Enter to pause",
        GameStatus::Stopped => "Press Enter to resume",
        GameStatus::Died => "Press Enter to play again",
        GameStatus::Destroyed => "",
    }
}

/// Text rendering of one frame: the board, then score and instructions.
pub fn render_frame(snapshot: &GameSnapshot) -> String {
    let cells = (snapshot.bounds.width / snapshot.cell_size) as usize;
    let mut grid = vec![vec![EMPTY_CHAR; cells]; cells];
    let cell = |value: u32| (value / snapshot.cell_size) as usize;

    grid[cell(snapshot.food.y)][cell(snapshot.food.x)] = FOOD_CHAR;
    for segment in snapshot.snake.iter().skip(1) {
        grid[cell(segment.position.y)][cell(segment.position.x)] = BODY_CHAR;
    }
    // Head last so it stays visible over a body part it ran into.
    if let Some(head) = snapshot.head() {
        grid[cell(head.position.y)][cell(head.position.x)] = HEAD_CHAR;
    }

    let mut frame = String::with_capacity((cells + 1) * (cells + 4));
    for row in grid {
        frame.extend(row);
        frame.push('\n');
    }
    frame.push_str(&format!("Score: {}\n", snapshot.score));
    if snapshot.status == GameStatus::Died {
        frame.push_str("Game Over\n");
    }
    frame.push_str(instructions(snapshot.status));
    frame.push('\n');
    frame
}
