use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::GridSize;
use crate::food::FoodKind;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::theme::{DisplayMode, Theme};
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{NameField, render_game_over_menu, render_start_menu};

/// Terminal columns per logical cell; keeps cells roughly square.
const CELL_WIDTH: u16 = 2;

/// Client-side values the renderer needs besides the game snapshot.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub mode: DisplayMode,
    pub name_field: &'a NameField,
}

/// Renders the full frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, view: View<'_>) {
    let theme = view.mode.theme();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.terminal_bg)),
        area,
    );

    let [title_row, body, footer_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Snake Game")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.text)
                    .bg(theme.terminal_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );
    frame.render_widget(
        Paragraph::new(format!("[Tab] {}", view.mode.toggle_label()))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.text_muted).bg(theme.terminal_bg)),
        footer_row,
    );

    match state.status {
        GameStatus::Start => {
            render_start_menu(frame, body, view.name_field, state.high_score, theme);
        }
        GameStatus::Playing => render_playfield(frame, body, state, theme),
        GameStatus::GameOver => render_game_over_menu(frame, body, state, theme),
    }
}

fn render_playfield(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let bounds = state.bounds();
    let board_width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let board_height = bounds.height.saturating_add(2);

    let [hud_area, board_row] = Layout::vertical([
        Constraint::Length(HUD_HEIGHT),
        Constraint::Length(board_height),
    ])
    .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(board_row);

    render_hud(frame, hud_area, state, theme);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg).bg(theme.terminal_bg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let buffer = frame.buffer_mut();
    for obstacle in &state.obstacles {
        paint_cell(buffer, inner, bounds, *obstacle, "▓▓", Style::new().fg(theme.obstacle));
    }
    render_food(buffer, inner, state, theme);
    render_snake(buffer, inner, state, theme);
}

fn render_food(buffer: &mut Buffer, inner: Rect, state: &GameState, theme: &Theme) {
    let style = match state.food_kind() {
        FoodKind::Normal => Style::new().fg(theme.food),
        FoodKind::Bonus { .. } => Style::new()
            .fg(theme.bonus_food)
            .add_modifier(Modifier::SLOW_BLINK),
    };
    paint_cell(buffer, inner, state.bounds(), state.food.position, "██", style);
}

fn render_snake(buffer: &mut Buffer, inner: Rect, state: &GameState, theme: &Theme) {
    let bounds = state.bounds();
    let body_style = Style::new().fg(theme.snake_body);

    for segment in state.snake.segments().skip(1) {
        paint_cell(buffer, inner, bounds, *segment, "██", body_style);
    }

    let head_style = Style::new()
        .fg(theme.play_bg)
        .bg(theme.snake_head)
        .add_modifier(Modifier::BOLD);
    paint_cell(
        buffer,
        inner,
        bounds,
        state.snake.head(),
        head_glyph(state.direction()),
        head_style,
    );
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "''",
        Direction::Down => "..",
        Direction::Left => ": ",
        Direction::Right => " :",
    }
}

fn paint_cell(
    buffer: &mut Buffer,
    inner: Rect,
    bounds: GridSize,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };
    buffer.set_string(x, y, glyph, style);
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
