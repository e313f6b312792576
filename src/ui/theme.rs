//! Palette for the popup TUI, dark by default with a light variant on F2.

use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy, Debug)]
pub struct ThemePalette {
    pub accent: Color,
    pub accent_alt: Color,
    pub text: Color,
    pub hint: Color,
    pub error: Color,
}

impl ThemePalette {
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(122, 162, 247),
            accent_alt: Color::Rgb(158, 206, 106),
            text: Color::Rgb(192, 202, 245),
            hint: Color::Rgb(105, 114, 158),
            error: Color::Rgb(247, 118, 142),
        }
    }

    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(52, 84, 138),
            accent_alt: Color::Rgb(72, 110, 54),
            text: Color::Rgb(40, 44, 52),
            hint: Color::Rgb(120, 124, 140),
            error: Color::Rgb(180, 60, 80),
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().fg(self.accent_alt).add_modifier(Modifier::BOLD)
    }
}
