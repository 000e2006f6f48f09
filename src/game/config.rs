use std::time::Duration;

/// Cells per side of the square playing field
pub const GRID_SIZE: usize = 20;

/// Time between two movement ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(150);

/// Minimum pointer travel, in screen units, for a gesture to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Points awarded per food eaten
pub const FOOD_REWARD: u32 = 10;

/// Snake length at the start of every game
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width and height of the game grid
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Score added for eating food
    pub food_reward: u32,
    /// Period of the movement timer
    pub tick_period: Duration,
    /// Swipe distance threshold in screen units
    pub swipe_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            food_reward: FOOD_REWARD,
            tick_period: TICK_PERIOD,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size, used by tests
    pub fn with_grid_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}
