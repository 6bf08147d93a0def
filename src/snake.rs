use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`, unclamped.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body plus its steering state.
///
/// `direction` is the direction of the last committed move; `pending` is the
/// direction the next move will take. Requests are checked against
/// `direction` only, so several requests between two moves resolve as
/// last-write-wins.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending: Direction,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        debug_assert!(!body.is_empty(), "snake needs at least one segment");

        Self {
            body,
            direction,
            pending: direction,
        }
    }

    /// Records a steering request. Returns false when it was rejected as a
    /// reversal of the current direction.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_reverse_of(self.direction) {
            return false;
        }

        self.pending = direction;
        true
    }

    /// Head position for the next move, computed from the pending direction.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().step(self.pending)
    }

    /// Returns the body that results from moving onto `next_head`.
    ///
    /// The receiver is left untouched so callers can validate first and
    /// commit the returned snake as one step.
    #[must_use]
    pub fn advanced(&self, next_head: Position, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(next_head);
        if !grow {
            body.pop_back();
        }

        Self {
            body,
            direction: self.pending,
            pending: self.pending,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment, tail included, occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true when two segments share a cell.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .any(|(idx, segment)| self.body.iter().skip(idx + 1).any(|other| other == segment))
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction of the last committed move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next move will take.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    fn two_segment(direction: Direction) -> Snake {
        Snake::from_segments(
            [Position { x: 8, y: 8 }, Position { x: 7, y: 8 }],
            direction,
        )
    }

    #[test]
    fn bounds_check_covers_both_axes() {
        let bounds = GridSize::square(20);

        assert!(Position { x: 0, y: 19 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 8 }.is_within_bounds(bounds));
        assert!(!Position { x: 8, y: 20 }.is_within_bounds(bounds));
    }

    #[test]
    fn snake_moves_one_cell_without_growing() {
        let snake = two_segment(Direction::Right);

        let moved = snake.advanced(snake.next_head_position(), false);

        assert_eq!(moved.head(), Position { x: 9, y: 8 });
        assert_eq!(moved.len(), 2);
        assert!(!moved.occupies(Position { x: 7, y: 8 }));
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let snake = two_segment(Direction::Right);

        let moved = snake.advanced(snake.next_head_position(), true);

        assert_eq!(moved.len(), 3);
        assert!(moved.occupies(Position { x: 7, y: 8 }));
    }

    #[test]
    fn direction_request_rejects_reverse() {
        let mut snake = two_segment(Direction::Right);

        assert!(!snake.request_direction(Direction::Left));
        assert_eq!(snake.next_head_position(), Position { x: 9, y: 8 });
    }

    #[test]
    fn direction_requests_are_last_write_wins() {
        let mut snake = two_segment(Direction::Right);

        assert!(snake.request_direction(Direction::Up));
        assert!(snake.request_direction(Direction::Down));

        assert_eq!(snake.pending_direction(), Direction::Down);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn reverse_check_uses_committed_direction_not_pending() {
        let mut snake = two_segment(Direction::Right);

        snake.request_direction(Direction::Up);
        // Left reverses the committed Right even though Up is pending.
        assert!(!snake.request_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn committed_move_updates_direction() {
        let mut snake = two_segment(Direction::Right);
        snake.request_direction(Direction::Down);

        let moved = snake.advanced(snake.next_head_position(), false);

        assert_eq!(moved.direction(), Direction::Down);
        assert_eq!(moved.head(), Position { x: 8, y: 9 });
    }

    #[test]
    fn overlap_detection_finds_shared_cells() {
        let clean = two_segment(Direction::Right);
        let folded = Snake::from_segments(
            [
                Position { x: 1, y: 1 },
                Position { x: 2, y: 1 },
                Position { x: 1, y: 1 },
            ],
            Direction::Left,
        );

        assert!(!clean.has_overlap());
        assert!(folded.has_overlap());
    }
}
