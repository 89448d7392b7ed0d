use std::io::Write;
use std::sync::{Arc, Mutex};

use snake_engine::games::snake::{GameSnapshot, SnakeGame, SnakeSettings};
use snake_engine::{log, log_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{GameCommand, PromptCommand};
use crate::render::render_frame;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const HELP_TEXT: &str = "\
Commands:
  snake (s)   play snake
  help  (h)   show this help
  quit  (q)   leave
In a game:
  w/a/s/d or up/down/left/right   steer
  Enter (or p)                    pause / resume / play again
  r                               restart
  q                               back to the prompt
";

/// Shared output sink. Frames arrive from the ticker task, prompts from the shell.
#[derive(Clone)]
pub struct Screen {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
    clear_between_frames: bool,
}

impl Screen {
    pub fn new(out: Box<dyn Write + Send>, clear_between_frames: bool) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            clear_between_frames,
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()), true)
    }

    pub fn print(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            log_warn!("Failed to write to the terminal: {}", e);
        }
    }

    pub fn draw(&self, snapshot: &GameSnapshot) {
        let frame = render_frame(snapshot);
        if self.clear_between_frames {
            self.print(&format!("{}{}", CLEAR_SCREEN, frame));
        } else {
            self.print(&frame);
        }
    }
}

pub struct Shell {
    settings: SnakeSettings,
    screen: Screen,
    game: Option<SnakeGame>,
}

impl Shell {
    pub fn new(settings: SnakeSettings, screen: Screen) -> Self {
        Self {
            settings,
            screen,
            game: None,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> Result<(), String>
    where
        R: AsyncBufRead + Unpin,
    {
        self.screen.print("Type `snake` to play, `help` for commands.\n");
        self.print_prompt();

        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| format!("Failed to read input: {}", e))?
        {
            let keep_going = if self.game.is_some() {
                self.handle_game_line(&line);
                true
            } else {
                self.handle_prompt_line(&line)?
            };

            if !keep_going {
                break;
            }
            self.print_prompt();
        }

        self.leave_game();
        Ok(())
    }

    fn print_prompt(&self) {
        if self.game.is_none() {
            self.screen.print("> ");
        }
    }

    fn handle_prompt_line(&mut self, line: &str) -> Result<bool, String> {
        match PromptCommand::parse(line) {
            PromptCommand::Snake => self.launch_game()?,
            PromptCommand::Help => self.screen.print(HELP_TEXT),
            PromptCommand::Quit => return Ok(false),
            PromptCommand::Nothing => {}
            PromptCommand::Unknown(command) => {
                self.screen
                    .print(&format!("Command not found: {}. Type `help` for commands.\n", command));
            }
        }
        Ok(true)
    }

    fn handle_game_line(&mut self, line: &str) {
        let Some(game) = self.game.as_ref() else {
            return;
        };

        match GameCommand::parse(line) {
            GameCommand::Turn(direction) => game.change_direction(direction),
            GameCommand::Toggle => game.toggle(),
            GameCommand::Restart => game.restart(),
            GameCommand::Leave => {
                self.leave_game();
                self.screen.print("Left the game.\n");
            }
            GameCommand::Unknown(command) => {
                self.screen.print(&format!("Unknown game command: {}\n", command));
            }
        }
    }

    fn launch_game(&mut self) -> Result<(), String> {
        let screen = self.screen.clone();
        let game = SnakeGame::new(self.settings.clone(), move |snapshot: GameSnapshot| {
            screen.draw(&snapshot)
        })?;

        self.screen.draw(&game.snapshot());
        self.game = Some(game);
        log!("Snake launched");
        Ok(())
    }

    fn leave_game(&mut self) {
        if let Some(game) = self.game.take() {
            game.destroy();
            log!("Snake closed");
        }
    }

    #[cfg(test)]
    fn in_game(&self) -> bool {
        self.game.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn shell() -> (Shell, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let screen = Screen::new(Box::new(buffer.clone()), false);
        let settings = SnakeSettings::new(10, 5)
            .with_seed(4)
            .with_tick_interval(Duration::from_millis(100));
        (Shell::new(settings, screen), buffer)
    }

    #[tokio::test(start_paused = true)]
    async fn test_help_and_unknown_commands() {
        let (mut shell, buffer) = shell();
        shell.run("help\nbegin\nquit\nsnake\n".as_bytes()).await.unwrap();

        let output = buffer.text();
        assert!(output.contains("Commands:"));
        assert!(output.contains("Command not found: begin"));
        assert!(!shell.in_game());
        assert!(!output.contains("Score:"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_snake_command_draws_the_board() {
        let (mut shell, buffer) = shell();
        shell.run("snake\nfly\nq\nquit\n".as_bytes()).await.unwrap();

        let output = buffer.text();
        assert!(output.contains('@'));
        assert!(output.contains("Score: 0"));
        assert!(output.contains("Press Enter to resume"));
        assert!(output.contains("Unknown game command: fly"));
        assert!(output.contains("Left the game."));
        assert!(!shell.in_game());
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_of_input_closes_the_game() {
        let (mut shell, _buffer) = shell();
        shell.run("snake\n\n".as_bytes()).await.unwrap();
        assert!(!shell.in_game());
    }
}
