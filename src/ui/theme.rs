//! Theme system for UI styling
//!
//! Provides consistent styling across the inventory list, status bar and
//! stone details modal.

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

/// UI theme containing all style definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color scheme
    pub colors: ColorScheme,
}

impl Theme {
    /// Load a theme by name, falling back to the default theme
    pub fn load(theme_name: &str) -> Self {
        match theme_name {
            "default" => Self::default_theme(),
            "dark" => Self::dark_theme(),
            "light" => Self::light_theme(),
            other => {
                warn!("Unknown theme '{}', using default", other);
                Self::default_theme()
            }
        }
    }

    /// Default theme (terminal colors with blue accents)
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            colors: ColorScheme {
                background: Color::Reset,
                foreground: Color::White,
                primary: Color::Blue,
                secondary: Color::Cyan,
                accent: Color::Yellow,
                success: Color::Green,
                error: Color::Red,
                muted: Color::DarkGray,
            },
        }
    }

    /// Dark theme with softer colors
    pub fn dark_theme() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ColorScheme {
                background: Color::Black,
                foreground: Color::Rgb(220, 220, 220),
                primary: Color::Rgb(100, 149, 237),
                secondary: Color::Rgb(72, 209, 204),
                accent: Color::Rgb(255, 215, 0),
                success: Color::Rgb(50, 205, 50),
                error: Color::Rgb(220, 20, 60),
                muted: Color::Rgb(105, 105, 105),
            },
        }
    }

    /// Light theme for better visibility
    pub fn light_theme() -> Self {
        Self {
            name: "light".to_string(),
            colors: ColorScheme {
                background: Color::White,
                foreground: Color::Black,
                primary: Color::Rgb(0, 100, 200),
                secondary: Color::Rgb(0, 150, 150),
                accent: Color::Rgb(200, 150, 0),
                success: Color::Rgb(0, 150, 0),
                error: Color::Rgb(200, 0, 0),
                muted: Color::Rgb(120, 120, 120),
            },
        }
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }

    /// Get style for focused borders (the open modal)
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.colors.primary)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.foreground)
    }

    /// Get style for titles and stone names
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.colors.foreground)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for selected/highlighted text
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.colors.background)
            .bg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the tier badge
    pub fn tier_badge_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.colors.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the enhancement badge
    pub fn enhancement_badge_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for status table headers
    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.colors.secondary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Get style for status values
    pub fn status_value_style(&self) -> Style {
        Style::default().fg(self.colors.success)
    }

    /// Get style for modal buttons
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style applied over the screen behind an open modal
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .fg(self.colors.muted)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for error messages
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.colors.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for muted/disabled text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }
}

/// Color scheme for themes
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(Theme::load("dark").name, "dark");
        assert_eq!(Theme::load("neon").name, "default");
    }
}
