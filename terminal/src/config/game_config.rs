use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_engine::config::Validate;
use snake_engine::games::snake::{SnakeSettings, DEFAULT_CELL_COUNT, DEFAULT_CELL_SIZE, DEFAULT_TICK_INTERVAL};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub cell_size: u32,
    pub cell_count: u32,
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn to_settings(&self) -> SnakeSettings {
        SnakeSettings {
            cell_size: self.cell_size,
            cell_count: self.cell_count,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            seed: self.seed,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=64).contains(&self.cell_size) {
            return Err("cell_size must be between 1 and 64".to_string());
        }
        if !(2..=100).contains(&self.cell_count) {
            return Err("cell_count must be between 2 and 100".to_string());
        }
        if !(10..=5000).contains(&self.tick_interval_ms) {
            return Err("tick_interval_ms must be between 10 and 5000".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            cell_count: DEFAULT_CELL_COUNT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_defaults() {
        assert_eq!(GameConfig::default().to_settings(), SnakeSettings::default());
    }

    #[test]
    fn test_bounds() {
        let base = GameConfig::default();
        assert!(base.validate().is_ok());
        assert!(GameConfig { cell_size: 0, ..base.clone() }.validate().is_err());
        assert!(GameConfig { cell_count: 1, ..base.clone() }.validate().is_err());
        assert!(GameConfig { cell_count: 101, ..base.clone() }.validate().is_err());
        assert!(GameConfig { tick_interval_ms: 5, ..base.clone() }.validate().is_err());
        assert!(GameConfig { tick_interval_ms: 5000, ..base }.validate().is_ok());
    }
}
