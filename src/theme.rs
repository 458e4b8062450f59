//! Roost theme and badge color utilities.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct RoostTheme {
    pub bg: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl RoostTheme {
    /// Warm amber-on-stone palette.
    pub fn roost() -> Self {
        Self {
            bg: Color::Rgb(28, 25, 23),
            bg_secondary: Color::Rgb(41, 37, 36),
            bg_highlight: Color::Rgb(68, 64, 60),
            primary: Color::Rgb(251, 191, 36),
            primary_dim: Color::Rgb(180, 130, 20),
            secondary: Color::Rgb(249, 115, 22),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
            info: Color::Rgb(96, 165, 250),
            text: Color::Rgb(250, 250, 249),
            text_dim: Color::Rgb(168, 162, 158),
            text_muted: Color::Rgb(120, 113, 108),
            border: Color::Rgb(87, 83, 78),
            border_focus: Color::Rgb(251, 191, 36),
        }
    }
}

/// Badge color for the health attribute. Unknown values fall back to dim.
pub fn health_color(health: &str, theme: &RoostTheme) -> Color {
    match health {
        "Light" => theme.success,
        "Balanced" => theme.warning,
        "Indulgent" => Color::Rgb(236, 72, 153),
        _ => theme.text_dim,
    }
}

/// Badge color for the diet attribute. Unknown values fall back to dim.
pub fn diet_color(diet: &str, theme: &RoostTheme) -> Color {
    match diet {
        "Vegan" => Color::Rgb(5, 150, 105),
        "Vegetarian" => Color::Rgb(132, 204, 22),
        "Meat" => Color::Rgb(248, 113, 113),
        _ => theme.text_dim,
    }
}
