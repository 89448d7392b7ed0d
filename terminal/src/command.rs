use snake_engine::games::snake::Direction;

/// What the top-level prompt understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Snake,
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

/// What the prompt understands while a game is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Direction),
    Toggle,
    Restart,
    Leave,
    Unknown(String),
}

impl PromptCommand {
    pub fn parse(line: &str) -> Self {
        let command = line.trim().to_lowercase();
        match command.as_str() {
            "" => PromptCommand::Nothing,
            "s" | "snake" => PromptCommand::Snake,
            "h" | "help" | "?" => PromptCommand::Help,
            "q" | "quit" | "exit" => PromptCommand::Quit,
            _ => PromptCommand::Unknown(command),
        }
    }
}

impl GameCommand {
    /// An empty line is the space bar.
    pub fn parse(line: &str) -> Self {
        if line.trim().is_empty() {
            return GameCommand::Toggle;
        }

        let command = line.trim().to_lowercase();
        match command.as_str() {
            "w" | "up" => GameCommand::Turn(Direction::Up),
            "s" | "down" => GameCommand::Turn(Direction::Down),
            "a" | "left" => GameCommand::Turn(Direction::Left),
            "d" | "right" => GameCommand::Turn(Direction::Right),
            "p" | "space" | "pause" => GameCommand::Toggle,
            "r" | "restart" => GameCommand::Restart,
            "q" | "quit" | "exit" => GameCommand::Leave,
            _ => GameCommand::Unknown(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_commands() {
        assert_eq!(PromptCommand::parse("snake"), PromptCommand::Snake);
        assert_eq!(PromptCommand::parse("  S \n"), PromptCommand::Snake);
        assert_eq!(PromptCommand::parse("help"), PromptCommand::Help);
        assert_eq!(PromptCommand::parse("exit"), PromptCommand::Quit);
        assert_eq!(PromptCommand::parse("   "), PromptCommand::Nothing);
        assert_eq!(PromptCommand::parse("Begin"), PromptCommand::Unknown("begin".to_string()));
    }

    #[test]
    fn test_game_commands() {
        assert_eq!(GameCommand::parse("w"), GameCommand::Turn(Direction::Up));
        assert_eq!(GameCommand::parse("DOWN"), GameCommand::Turn(Direction::Down));
        assert_eq!(GameCommand::parse("a"), GameCommand::Turn(Direction::Left));
        assert_eq!(GameCommand::parse("right"), GameCommand::Turn(Direction::Right));
        assert_eq!(GameCommand::parse(""), GameCommand::Toggle);
        assert_eq!(GameCommand::parse(" "), GameCommand::Toggle);
        assert_eq!(GameCommand::parse("p"), GameCommand::Toggle);
        assert_eq!(GameCommand::parse("r"), GameCommand::Restart);
        assert_eq!(GameCommand::parse("q"), GameCommand::Leave);
        assert_eq!(GameCommand::parse("jump"), GameCommand::Unknown("jump".to_string()));
    }
}
