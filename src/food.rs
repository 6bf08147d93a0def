use rand::Rng;

use crate::config::{BONUS_DURATION_SECS, BONUS_FOOD_POINTS, GridSize, NORMAL_FOOD_POINTS};
use crate::snake::Position;

/// Food type and associated metadata.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodKind {
    Normal,
    Bonus { seconds_left: u32 },
}

impl FoodKind {
    /// Fresh bonus with the full countdown.
    #[must_use]
    pub fn bonus() -> Self {
        Self::Bonus {
            seconds_left: BONUS_DURATION_SECS,
        }
    }

    #[must_use]
    pub fn is_bonus(self) -> bool {
        matches!(self, Self::Bonus { .. })
    }

    /// Remaining bonus seconds; zero for normal food.
    #[must_use]
    pub fn seconds_left(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Bonus { seconds_left } => seconds_left,
        }
    }

    /// Runs one second of bonus countdown, reverting to normal at zero.
    ///
    /// Returns `true` when this call expired the bonus.
    pub fn count_down(&mut self) -> bool {
        let Self::Bonus { seconds_left } = self else {
            return false;
        };

        *seconds_left = seconds_left.saturating_sub(1);
        if *seconds_left == 0 {
            *self = Self::Normal;
            return true;
        }
        false
    }

    /// Score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Normal => NORMAL_FOOD_POINTS,
            Self::Bonus { .. } => BONUS_FOOD_POINTS,
        }
    }
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    /// Creates a normal food at `position`.
    #[must_use]
    pub fn normal(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Normal,
        }
    }

    /// Creates a bonus food at `position` with a full countdown.
    #[must_use]
    pub fn bonus(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::bonus(),
        }
    }

    /// Spawns normal food anywhere on the board.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::normal(random_position(rng, bounds))
    }
}

/// Picks a uniformly random cell.
///
/// Occupied cells are not excluded: food and obstacles may land on the snake
/// or on each other.
#[must_use]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
