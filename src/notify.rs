use std::io::{self, Write};

use crate::game::GameEvent;

/// Receives the discrete sound cues the engine emits.
pub trait AudioNotifier {
    fn notify(&mut self, event: GameEvent);
}

/// Collects events in order; handy for driving tests.
impl AudioNotifier for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Rings the terminal bell for each cue.
///
/// A bonus rings twice and game over three times so the cues stay
/// distinguishable without audio assets.
#[derive(Debug, Clone, Copy)]
pub struct TerminalBell {
    muted: bool,
}

impl TerminalBell {
    #[must_use]
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl AudioNotifier for TerminalBell {
    fn notify(&mut self, event: GameEvent) {
        log::debug!("audio cue: {event:?}");
        if self.muted {
            return;
        }

        let rings = bell_count(event);
        let mut stdout = io::stdout();
        let _ = stdout.write_all("\x07".repeat(rings).as_bytes());
        let _ = stdout.flush();
    }
}

fn bell_count(event: GameEvent) -> usize {
    match event {
        GameEvent::FoodEaten => 1,
        GameEvent::BonusEaten => 2,
        GameEvent::GameOver => 3,
    }
}

#[cfg(test)]
mod tests {
    use crate::game::GameEvent;

    use super::{AudioNotifier, bell_count};

    #[test]
    fn vec_notifier_records_in_order() {
        let mut events = Vec::new();
        events.notify(GameEvent::FoodEaten);
        events.notify(GameEvent::GameOver);

        assert_eq!(events, vec![GameEvent::FoodEaten, GameEvent::GameOver]);
    }

    #[test]
    fn bell_counts_are_distinct_per_cue() {
        assert_eq!(bell_count(GameEvent::FoodEaten), 1);
        assert_eq!(bell_count(GameEvent::BonusEaten), 2);
        assert_eq!(bell_count(GameEvent::GameOver), 3);
    }
}
