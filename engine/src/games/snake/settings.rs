use std::time::Duration;

use crate::config::Validate;

pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_CELL_COUNT: u32 = 30;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSettings {
    /// Side of one cell. Opaque to the engine beyond coordinate scaling.
    pub cell_size: u32,
    /// Cells per axis; the board is square.
    pub cell_count: u32,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
}

impl SnakeSettings {
    pub fn new(cell_size: u32, cell_count: u32) -> Self {
        Self {
            cell_size,
            cell_count,
            ..Self::default()
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            cell_count: DEFAULT_CELL_COUNT,
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be positive".to_string());
        }
        if self.cell_count == 0 {
            return Err("cell_count must be positive".to_string());
        }
        if self.cell_count < 2 {
            return Err("cell_count must be at least 2 so food has somewhere to go".to_string());
        }
        if self.cell_size.checked_mul(self.cell_count).is_none() {
            return Err(format!(
                "board of {} cells of size {} does not fit in u32",
                self.cell_count, self.cell_size
            ));
        }
        if self.tick_interval.is_zero() {
            return Err("tick_interval must be positive".to_string());
        }
        Ok(())
    }
}
