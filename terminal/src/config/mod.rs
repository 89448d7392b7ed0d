mod config;
mod game_config;
mod log_config;

pub use config::{get_config_manager, Config};
pub use game_config::GameConfig;
pub use log_config::LogConfig;
