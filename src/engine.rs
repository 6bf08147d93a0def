use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FOODS_PER_BONUS, MIN_SPEED_MS};
use crate::food::{Food, FoodKind};
use crate::game::{GameEvent, GameState, GameStatus};
use crate::input::Direction;
use crate::notify::AudioNotifier;
use crate::store::{KeyValueStore, load_high_score, save_high_score};

/// Drives one [`GameState`] through its session lifecycle.
///
/// The engine never schedules anything itself: a driver calls
/// [`GameEngine::advance`] every movement period and
/// [`GameEngine::tick_bonus`] every second.
pub struct GameEngine<N, S> {
    state: GameState,
    rng: StdRng,
    notifier: N,
    store: S,
}

impl<N: AudioNotifier, S: KeyValueStore> GameEngine<N, S> {
    /// Creates an engine with entropy-seeded randomness.
    pub fn new(notifier: N, store: S) -> Self {
        Self::with_rng(notifier, store, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    pub fn new_with_seed(notifier: N, store: S, seed: u64) -> Self {
        Self::with_rng(notifier, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(notifier: N, store: S, mut rng: StdRng) -> Self {
        let high_score = load_high_score(&store);
        let state = GameState::new(&mut rng, high_score);

        Self {
            state,
            rng,
            notifier,
            store,
        }
    }

    /// Read-only snapshot for renderers.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for test setups that need an exact board. Clients go
    /// through the operations above instead.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sets the movement period; the scheduler re-arms on its next pump.
    pub fn set_speed_ms(&mut self, speed_ms: u64) {
        self.state.speed_ms = speed_ms.max(MIN_SPEED_MS);
    }

    /// Begins a session from the start screen.
    ///
    /// Blank names and calls outside [`GameStatus::Start`] are ignored.
    /// Returns whether a session started.
    pub fn start_game(&mut self, name: &str) -> bool {
        if self.state.status != GameStatus::Start {
            return false;
        }

        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        self.state.reset(&mut self.rng);
        self.state.player_name = name.to_owned();
        self.state.status = GameStatus::Playing;

        log::info!(
            "session started for {name:?} with {} obstacles",
            self.state.obstacles.len()
        );
        true
    }

    /// Requests a new heading for the next move.
    ///
    /// Only honoured while playing; reversals of the current heading are
    /// dropped. Returns whether the request was recorded.
    pub fn handle_direction(&mut self, direction: Direction) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }

        self.state.snake.request_direction(direction)
    }

    /// Leaves the game-over screen. The last session's name and score stay
    /// on the state until the next [`GameEngine::start_game`].
    pub fn return_to_start(&mut self) -> bool {
        if self.state.status != GameStatus::GameOver {
            return false;
        }

        self.state.status = GameStatus::Start;
        true
    }

    /// Runs one movement tick and returns the cue it produced, if any.
    ///
    /// Collision is decided before anything is mutated; a fatal move leaves
    /// snake, food and score exactly as they were.
    pub fn advance(&mut self) -> Option<GameEvent> {
        if self.state.status != GameStatus::Playing {
            return None;
        }

        let head = self.state.snake.next_head_position();
        if let Some(cause) = self.state.collision_at(head) {
            self.state.status = GameStatus::GameOver;
            self.state.death_cause = Some(cause);
            self.notifier.notify(GameEvent::GameOver);

            log::info!(
                "game over for {:?}: {cause:?} at ({}, {}), score {}",
                self.state.player_name,
                head.x,
                head.y,
                self.state.score
            );
            return Some(GameEvent::GameOver);
        }

        let ate = head == self.state.food.position;
        let snake = self.state.snake.advanced(head, ate);

        if !ate {
            self.state.snake = snake;
            return None;
        }

        let eaten = self.state.food.kind;
        let event = if eaten.is_bonus() {
            GameEvent::BonusEaten
        } else {
            GameEvent::FoodEaten
        };
        let score = self.state.score + eaten.points();
        let food_count = self.state.food_count + 1;

        // The replacement always starts normal, which also clears any
        // running bonus countdown.
        let mut food = Food::spawn(&mut self.rng, self.state.bounds());
        if food_count % FOODS_PER_BONUS == 0 {
            food.kind = FoodKind::bonus();
            log::debug!("bonus food spawned after {food_count} foods");
        }

        self.state.snake = snake;
        self.state.food = food;
        self.state.food_count = food_count;
        self.state.score = score;

        self.notifier.notify(event);
        self.update_high_score();
        Some(event)
    }

    /// Runs one second of bonus countdown. Returns true when the bonus
    /// expired on this call.
    pub fn tick_bonus(&mut self) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }

        let expired = self.state.food.kind.count_down();
        if expired {
            log::debug!("bonus food expired uneaten");
        }
        expired
    }

    fn update_high_score(&mut self) {
        if self.state.score <= self.state.high_score {
            return;
        }

        self.state.high_score = self.state.score;
        if let Err(error) = save_high_score(&mut self.store, self.state.high_score) {
            log::warn!("failed to persist high score {}: {error}", self.state.high_score);
        }
    }
}
