use std::ops::ControlFlow;

use crate::engine::GameEngine;
use crate::game::GameStatus;
use crate::input::{GameInput, direction_for_char};
use crate::notify::AudioNotifier;
use crate::store::KeyValueStore;
use crate::theme::DisplayMode;
use crate::ui::menu::NameField;

/// Client-only state that the engine does not own.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ClientState {
    pub name_field: NameField,
    pub mode: DisplayMode,
}

impl ClientState {
    #[must_use]
    pub fn new(name: &str, mode: DisplayMode) -> Self {
        Self {
            name_field: NameField::new(name),
            mode,
        }
    }
}

/// Routes one input to the engine or the client state for the current
/// screen. Breaks when the player asks to quit.
///
/// On the start screen every printable key, `q` and WASD included, edits
/// the name.
pub fn handle_input<N, S>(
    engine: &mut GameEngine<N, S>,
    client: &mut ClientState,
    input: GameInput,
) -> ControlFlow<()>
where
    N: AudioNotifier,
    S: KeyValueStore,
{
    match (engine.state().status, input) {
        (_, GameInput::Quit) => return ControlFlow::Break(()),
        (_, GameInput::ToggleTheme) => client.mode = client.mode.toggled(),

        (GameStatus::Start, GameInput::Char(c)) => client.name_field.push(c),
        (GameStatus::Start, GameInput::Backspace) => client.name_field.pop(),
        (GameStatus::Start, GameInput::Confirm) => {
            if !engine.start_game(client.name_field.as_str()) {
                log::debug!("start ignored, name is blank");
            }
        }

        (GameStatus::Playing, GameInput::Direction(direction)) => {
            engine.handle_direction(direction);
        }
        (GameStatus::Playing | GameStatus::GameOver, GameInput::Char('q')) => {
            return ControlFlow::Break(());
        }
        (GameStatus::Playing, GameInput::Char(c)) => {
            if let Some(direction) = direction_for_char(c) {
                engine.handle_direction(direction);
            }
        }

        (GameStatus::GameOver, GameInput::Confirm) => {
            engine.return_to_start();
        }
        _ => {}
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use crate::engine::GameEngine;
    use crate::game::{GameEvent, GameStatus};
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};
    use crate::store::MemoryStore;
    use crate::theme::DisplayMode;
    use crate::ui::menu::NameField;

    use super::{ClientState, handle_input};

    type TestEngine = GameEngine<Vec<GameEvent>, MemoryStore>;

    fn engine() -> TestEngine {
        GameEngine::new_with_seed(Vec::new(), MemoryStore::new(), 31)
    }

    fn playing(client: &mut ClientState) -> TestEngine {
        let mut engine = engine();
        client.name_field = NameField::new("ada");
        press(&mut engine, client, GameInput::Confirm);
        assert_eq!(engine.state().status, GameStatus::Playing);
        engine.state_mut().obstacles.clear();
        engine
    }

    fn press(engine: &mut TestEngine, client: &mut ClientState, input: GameInput) {
        assert!(handle_input(engine, client, input).is_continue());
    }

    #[test]
    fn start_screen_keys_edit_the_name() {
        let mut engine = engine();
        let mut client = ClientState::default();

        for c in ['q', 'w', 'a', 's', 'd'] {
            press(&mut engine, &mut client, GameInput::Char(c));
        }
        press(&mut engine, &mut client, GameInput::Backspace);

        assert_eq!(client.name_field.as_str(), "qwas");
        assert_eq!(engine.state().status, GameStatus::Start);
    }

    #[test]
    fn confirm_needs_a_name_to_start() {
        let mut engine = engine();
        let mut client = ClientState::new("   ", DisplayMode::Light);

        press(&mut engine, &mut client, GameInput::Confirm);
        assert_eq!(engine.state().status, GameStatus::Start);

        client.name_field = NameField::new("ada");
        press(&mut engine, &mut client, GameInput::Confirm);
        assert_eq!(engine.state().status, GameStatus::Playing);
        assert_eq!(engine.state().player_name, "ada");
    }

    #[test]
    fn wasd_steers_while_playing() {
        let mut client = ClientState::default();
        let mut engine = playing(&mut client);

        press(&mut engine, &mut client, GameInput::Char('w'));
        assert_eq!(engine.state().snake.pending_direction(), Direction::Up);

        // Reverse of the committed heading.
        press(&mut engine, &mut client, GameInput::Char('a'));
        assert_eq!(engine.state().snake.pending_direction(), Direction::Up);

        press(&mut engine, &mut client, GameInput::Direction(Direction::Down));
        assert_eq!(engine.state().snake.pending_direction(), Direction::Down);
        assert_eq!(client.name_field.as_str(), "ada");
    }

    #[test]
    fn q_quits_outside_the_start_screen() {
        let mut client = ClientState::default();
        let mut engine = playing(&mut client);
        assert!(handle_input(&mut engine, &mut client, GameInput::Char('q')).is_break());

        engine.state_mut().snake = Snake::from_segments(
            [Position { x: 19, y: 5 }, Position { x: 18, y: 5 }],
            Direction::Right,
        );
        engine.advance();
        assert_eq!(engine.state().status, GameStatus::GameOver);
        assert!(handle_input(&mut engine, &mut client, GameInput::Char('q')).is_break());
    }

    #[test]
    fn game_over_confirm_returns_to_start() {
        let mut client = ClientState::default();
        let mut engine = playing(&mut client);
        engine.state_mut().snake = Snake::from_segments(
            [Position { x: 19, y: 5 }, Position { x: 18, y: 5 }],
            Direction::Right,
        );
        engine.advance();

        press(&mut engine, &mut client, GameInput::Confirm);

        assert_eq!(engine.state().status, GameStatus::Start);
    }

    #[test]
    fn quit_and_theme_toggle_work_on_every_screen() {
        let mut engine = engine();
        let mut client = ClientState::default();

        press(&mut engine, &mut client, GameInput::ToggleTheme);
        assert_eq!(client.mode, DisplayMode::Dark);
        assert!(handle_input(&mut engine, &mut client, GameInput::Quit).is_break());

        let mut engine = playing(&mut client);
        press(&mut engine, &mut client, GameInput::ToggleTheme);
        assert_eq!(client.mode, DisplayMode::Light);
        assert!(handle_input(&mut engine, &mut client, GameInput::Quit).is_break());
    }
}
