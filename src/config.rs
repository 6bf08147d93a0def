use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Square grid with `side` cells on each axis.
    #[must_use]
    pub const fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Cells per side of the square play field.
pub const GRID_SIZE: u16 = 20;

/// Play field bounds.
pub const GRID: GridSize = GridSize::square(GRID_SIZE);

/// Starting body, head first.
pub const INITIAL_SNAKE: [Position; 2] = [Position { x: 8, y: 8 }, Position { x: 7, y: 8 }];

/// Number of obstacles generated per session.
pub const OBSTACLE_COUNT: usize = 10;

/// Seconds a bonus food stays worth bonus points.
pub const BONUS_DURATION_SECS: u32 = 10;

/// Every n-th eaten food spawns bonus food.
pub const FOODS_PER_BONUS: u32 = 5;

/// Points for a normal food.
pub const NORMAL_FOOD_POINTS: u32 = 1;

/// Points for a bonus food.
pub const BONUS_FOOD_POINTS: u32 = 5;

/// Movement tick period in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 200;

/// Lower clamp for a user supplied movement period.
pub const MIN_SPEED_MS: u64 = 50;

/// Bonus countdown period in milliseconds.
pub const BONUS_PERIOD_MS: u64 = 1000;

/// Store key holding the persisted high score.
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "grid-snake";

/// Render loop frame pacing in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;
