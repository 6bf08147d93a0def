use ratatui::style::Color;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub bonus_food: Color,
    pub obstacle: Color,
    /// Background for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    /// Background for everything outside the play area.
    pub terminal_bg: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub danger: Color,
    pub gauge: Color,
}

pub const THEME_LIGHT: Theme = Theme {
    name: "Light",
    snake_head: Color::Rgb(21, 128, 61),
    snake_body: Color::Rgb(34, 197, 94),
    food: Color::Rgb(239, 68, 68),
    bonus_food: Color::Rgb(59, 130, 246),
    obstacle: Color::Rgb(107, 114, 128),
    play_bg: Color::Rgb(255, 255, 255),
    border_fg: Color::Rgb(156, 163, 175),
    terminal_bg: Color::Rgb(243, 244, 246),
    text: Color::Black,
    text_muted: Color::Rgb(75, 85, 99),
    accent: Color::Rgb(34, 197, 94),
    danger: Color::Rgb(239, 68, 68),
    gauge: Color::Rgb(34, 197, 94),
};

pub const THEME_DARK: Theme = Theme {
    name: "Dark",
    snake_head: Color::Rgb(21, 128, 61),
    snake_body: Color::Rgb(34, 197, 94),
    food: Color::Rgb(239, 68, 68),
    bonus_food: Color::Rgb(59, 130, 246),
    obstacle: Color::Rgb(107, 114, 128),
    play_bg: Color::Rgb(31, 41, 55),
    border_fg: Color::Rgb(75, 85, 99),
    terminal_bg: Color::Rgb(17, 24, 39),
    text: Color::White,
    text_muted: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(74, 222, 128),
    danger: Color::Rgb(248, 113, 113),
    gauge: Color::Rgb(34, 197, 94),
};

/// Light/dark display mode. Purely cosmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Light => &THEME_LIGHT,
            Self::Dark => &THEME_DARK,
        }
    }

    /// Label for the toggle hint, naming the mode it switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }
}
