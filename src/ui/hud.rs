use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::config::BONUS_DURATION_SECS;
use crate::game::GameState;
use crate::theme::Theme;

/// Rows the HUD needs above the play field.
pub const HUD_HEIGHT: u16 = 3;

/// Renders the score row and, while bonus food is up, the bonus countdown.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let [score_row, bonus_label_row, bonus_gauge_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, theme))
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.terminal_bg)),
        score_row,
    );

    if !state.food_kind().is_bonus() {
        return;
    }

    let seconds_left = state.bonus_timer();
    frame.render_widget(
        Paragraph::new(format!("Bonus ends in: {seconds_left}s"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.bonus_food)
                    .bg(theme.terminal_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        bonus_label_row,
    );

    let [_, gauge_area, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(32),
        Constraint::Min(0),
    ])
    .areas(bonus_gauge_row);
    frame.render_widget(
        Gauge::default()
            .ratio(bonus_ratio(seconds_left))
            .label("")
            .gauge_style(Style::default().fg(theme.gauge).bg(theme.border_fg)),
        gauge_area,
    );
}

/// Fraction of the bonus window still left, clamped to `0.0..=1.0`.
#[must_use]
pub fn bonus_ratio(seconds_left: u32) -> f64 {
    (f64::from(seconds_left) / f64::from(BONUS_DURATION_SECS)).clamp(0.0, 1.0)
}

fn score_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.text_muted);
    let value = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let high_value = if state.score > 0 && state.score == state.high_score {
        value.fg(theme.accent)
    } else {
        value
    };

    Line::from(vec![
        Span::styled("Player: ", label),
        Span::styled(state.player_name.clone(), value),
        Span::raw("   "),
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        Span::raw("   "),
        Span::styled("High Score: ", label),
        Span::styled(state.high_score.to_string(), high_value),
    ])
}
