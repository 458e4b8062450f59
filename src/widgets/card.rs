//! Recipe list entries with attribute badges.

use crate::recipe::Recipe;
use crate::theme::{diet_color, health_color, RoostTheme};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
};

/// One list row: the title plus colored badges for whichever of the health,
/// diet, and time attributes are present.
pub fn recipe_list_item<'a>(recipe: &'a Recipe, theme: &RoostTheme) -> ListItem<'a> {
    let mut spans = vec![Span::styled(
        recipe.display_title().to_string(),
        Style::default().fg(theme.text),
    )];

    if let Some(health) = recipe.health.as_deref() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", health),
            Style::default().fg(health_color(health, theme)),
        ));
    }
    if let Some(diet) = recipe.diet.as_deref() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", diet),
            Style::default().fg(diet_color(diet, theme)),
        ));
    }
    if let Some(time) = recipe.time.as_deref() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", time),
            Style::default().fg(theme.info),
        ));
    }

    ListItem::new(Line::from(spans))
}
