//! Common view rendering helpers.

use crate::recipe::Recipe;
use crate::state::App;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Two-column split shared by both tabs: list on the left, detail on the
/// right.
pub fn list_detail_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the selected recipe's attributes and prose. Only present fields
/// get a line; an absent field shows nothing.
pub fn render_recipe_detail(f: &mut Frame<'_>, app: &App, recipe: &Recipe, area: Rect) {
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area);

    let mut fields: Vec<(&str, String)> = Vec::new();
    if let Some(title) = &recipe.title {
        fields.push(("Title", title.clone()));
    }
    if let Some(source) = &recipe.source {
        let value = match &recipe.source_detail {
            Some(detail) if detail != source => format!("{} • {}", source, detail),
            _ => source.clone(),
        };
        fields.push(("Source", value));
    }
    if let Some(meal_type) = &recipe.meal_type {
        fields.push(("Meal Type", meal_type.clone()));
    }
    if let Some(effort) = &recipe.effort {
        fields.push(("Effort", effort.clone()));
    }
    if let Some(diet) = &recipe.diet {
        fields.push(("Diet", diet.clone()));
    }
    if let Some(health) = &recipe.health {
        fields.push(("Health", health.clone()));
    }
    if let Some(cuisine) = &recipe.cuisine {
        fields.push(("Cuisine", cuisine.clone()));
    }
    if let Some(hero) = &recipe.hero_ingredient {
        fields.push(("Hero Ingredient", hero.clone()));
    }
    if let Some(time) = &recipe.time {
        fields.push(("Time", time.clone()));
    }
    if let Some(url) = &recipe.source_url {
        fields.push(("Recipe URL", url.clone()));
    }
    if let Some(image) = &recipe.image_url {
        fields.push(("Image", image.clone()));
    }

    let detail = DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
    };
    detail.render(f, right[0]);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(description) = &recipe.description {
        lines.push(Line::from(description.clone()));
    }
    if let Some(why) = &recipe.why_youll_love_it {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(
            format!("Why you'll love it: {}", why),
            Style::default().fg(app.theme.success),
        ));
    }
    let prose = Paragraph::new(lines)
        .block(Block::default().title("About").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(prose, right[1]);
}

/// Centered-ish empty state for a tab with no matching recipes.
pub fn render_empty_state(f: &mut Frame<'_>, app: &App, title: &str, message: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(app.theme.text_dim)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
