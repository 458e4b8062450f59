//! Inspire Me tab: the filtered inspiration feed with a save affordance and
//! manual refresh.

use super::helpers::{list_detail_split, render_empty_state, render_recipe_detail};
use crate::nav::Tab;
use crate::state::App;
use crate::widgets::recipe_list_item;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let filtered = app.filtered(Tab::Inspire);

    let mut title = format!("Recipe Inspiration: {} match your filters", filtered.len());
    if let Some(generated_at) = app.inspiration.as_ref().and_then(|doc| doc.generated_at) {
        title.push_str(&format!(" • generated {}", generated_at.format("%-d %b %Y")));
    }

    if filtered.is_empty() {
        render_empty_state(f, app, &title, app.empty_message(Tab::Inspire), area);
        return;
    }

    let (left, right) = list_detail_split(area);

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|recipe| recipe_list_item(recipe, &app.theme))
        .collect();

    let mut state = ListState::default();
    if let Some(index) = app.inspire_selected {
        state.select(Some(index.min(filtered.len() - 1)));
    }

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, left, &mut state);

    if let Some(recipe) = app.selected_recipe() {
        render_recipe_detail(f, app, recipe, right);
    } else {
        let hint = Block::default()
            .title("Details (j/k to select, s to save, r to refresh)")
            .borders(Borders::ALL);
        f.render_widget(hint, right);
    }
}
