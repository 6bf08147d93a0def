use rand::Rng;

use crate::config::{DEFAULT_SPEED_MS, GRID, GridSize, INITIAL_SNAKE, OBSTACLE_COUNT};
use crate::food::{Food, FoodKind, random_position};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Start,
    Playing,
    GameOver,
}

/// Discrete notifications for the audio layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    FoodEaten,
    BonusEaten,
    GameOver,
}

/// What ended the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollisionKind {
    Wall,
    Body,
    Obstacle,
}

/// Authoritative snapshot of one session.
///
/// Owned by the engine; renderers only read it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    /// May contain duplicates; see [`generate_obstacles`].
    pub obstacles: Vec<Position>,
    pub score: u32,
    pub high_score: u32,
    pub food_count: u32,
    pub status: GameStatus,
    pub player_name: String,
    /// Movement period in milliseconds.
    pub speed_ms: u64,
    pub death_cause: Option<CollisionKind>,
    bounds: GridSize,
}

impl GameState {
    /// Fresh state on the start screen with the given persisted high score.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R, high_score: u32) -> Self {
        let mut state = Self {
            snake: initial_snake(),
            food: Food::normal(INITIAL_SNAKE[0]),
            obstacles: Vec::new(),
            score: 0,
            high_score,
            food_count: 0,
            status: GameStatus::Start,
            player_name: String::new(),
            speed_ms: DEFAULT_SPEED_MS,
            death_cause: None,
            bounds: GRID,
        };
        state.reset(rng);
        state
    }

    /// Restores the per-session fields: initial snake heading right, new
    /// obstacles and food, zeroed score and counters, normal food.
    ///
    /// Status, player name, speed and high score are left to the caller.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.snake = initial_snake();
        self.obstacles = generate_obstacles(rng, self.bounds);
        self.food = Food::spawn(rng, self.bounds);
        self.score = 0;
        self.food_count = 0;
        self.death_cause = None;
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn food_kind(&self) -> FoodKind {
        self.food.kind
    }

    /// Remaining bonus seconds, zero unless bonus food is active.
    #[must_use]
    pub fn bonus_timer(&self) -> u32 {
        self.food.kind.seconds_left()
    }

    #[must_use]
    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    /// Classifies `head` as a fatal cell, if it is one.
    ///
    /// The whole current body counts, tail included, because the tail is
    /// only dropped after the check.
    #[must_use]
    pub fn collision_at(&self, head: Position) -> Option<CollisionKind> {
        if !head.is_within_bounds(self.bounds) {
            Some(CollisionKind::Wall)
        } else if self.snake.occupies(head) {
            Some(CollisionKind::Body)
        } else if self.is_obstacle(head) {
            Some(CollisionKind::Obstacle)
        } else {
            None
        }
    }
}

/// Generates [`OBSTACLE_COUNT`] random obstacle cells.
///
/// Cells are drawn independently, so two obstacles can coincide and
/// obstacles can sit on the starting snake or the food.
#[must_use]
pub fn generate_obstacles<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Vec<Position> {
    (0..OBSTACLE_COUNT)
        .map(|_| random_position(rng, bounds))
        .collect()
}

fn initial_snake() -> Snake {
    Snake::from_segments(INITIAL_SNAKE, Direction::Right)
}
