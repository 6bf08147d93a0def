use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::game::{CollisionKind, GameState};
use crate::theme::Theme;

/// Longest accepted player name, in display columns.
pub const NAME_MAX_WIDTH: usize = 24;

/// Editable player-name text box on the start screen.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct NameField {
    value: String,
}

impl NameField {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let mut field = Self::default();
        for c in initial.chars() {
            field.push(c);
        }
        field
    }

    /// Appends `c` unless it is a control character or would overflow.
    pub fn push(&mut self, c: char) {
        if c.is_control() {
            return;
        }

        let mut candidate = self.value.clone();
        candidate.push(c);
        if candidate.width() <= NAME_MAX_WIDTH {
            self.value = candidate;
        }
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.value.width()
    }
}

/// Draws the start screen with the name box as a centered popup.
pub fn render_start_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    name: &NameField,
    high_score: u32,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);

    let [title_row, input_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    let base = Style::default().fg(theme.text).bg(theme.terminal_bg);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(base.fg(theme.accent).add_modifier(Modifier::BOLD)),
        title_row,
    );

    let placeholder = name.as_str().is_empty();
    let input_line = if placeholder {
        Line::from(Span::styled(
            "Enter your name",
            Style::default().fg(theme.text_muted),
        ))
    } else {
        Line::from(name.as_str())
    };
    let input_block = Block::bordered().title(" player ").style(base);
    let input_inner = input_block.inner(input_row);
    frame.render_widget(Paragraph::new(input_line).block(input_block), input_row);

    let cursor_offset = if placeholder { 0 } else { name.width() };
    let cursor_x = input_inner
        .x
        .saturating_add(u16::try_from(cursor_offset).unwrap_or(u16::MAX))
        .min(input_inner.right().saturating_sub(1));
    frame.set_cursor_position((cursor_x, input_inner.y));

    let body = vec![
        Line::from(format!("High Score: {high_score}")),
        Line::from(""),
        Line::from("[Enter] Play Game"),
        Line::from("[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .style(base)
            .block(Block::bordered().title(" start ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Arrows/WASD move  [Tab] toggle dark mode"))
            .alignment(Alignment::Center)
            .style(base.fg(theme.text_muted)),
        footer_row,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let base = Style::default().fg(theme.text).bg(theme.terminal_bg);
    let lines = vec![
        Line::from(Span::styled(
            "Game Over",
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Player: {}", state.player_name)),
        Line::from(format!("Score: {}", state.score)),
        Line::from(format!("High Score: {}", state.high_score)),
        Line::from(death_cause_label(state.death_cause)),
        Line::from(""),
        Line::from("[Enter] Back to Start"),
        Line::from("[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(base)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn death_cause_label(cause: Option<CollisionKind>) -> &'static str {
    match cause {
        Some(CollisionKind::Wall) => "Cause: hit wall",
        Some(CollisionKind::Body) => "Cause: hit yourself",
        Some(CollisionKind::Obstacle) => "Cause: hit obstacle",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::{NAME_MAX_WIDTH, NameField, render_start_menu};
    use crate::theme::THEME_LIGHT;

    #[test]
    fn name_field_rejects_control_chars_and_overflow() {
        let mut field = NameField::new("ada");
        field.push('\n');
        assert_eq!(field.as_str(), "ada");

        for _ in 0..NAME_MAX_WIDTH {
            field.push('x');
        }
        assert_eq!(field.width(), NAME_MAX_WIDTH);

        field.pop();
        assert_eq!(field.width(), NAME_MAX_WIDTH - 1);
    }

    #[test]
    fn start_menu_shows_high_score() {
        let mut terminal =
            Terminal::new(TestBackend::new(60, 24)).expect("test backend should build");
        let field = NameField::new("ada");

        terminal
            .draw(|frame| render_start_menu(frame, frame.area(), &field, 17, &THEME_LIGHT))
            .expect("draw should succeed");

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("High Score: 17"));
        assert!(rendered.contains("ada"));
    }
}
