use serde::{Deserialize, Serialize};
use snake_engine::config::Validate;
use snake_engine::logger::LogLevel;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("log prefix must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            prefix: None,
        }
    }
}
