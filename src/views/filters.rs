//! Filter panel: seven facet selectors plus the source chip row.

use crate::filter::Facet;
use crate::recipe::SOURCES;
use crate::state::App;
use crate::widgets::{Chip, ChipRow};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3)])
        .split(area);

    render_facets(f, app, rows[0]);
    render_sources(f, app, rows[1]);
}

fn render_facets(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for (row, facet) in Facet::all().iter().enumerate() {
        if row > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        let focused = app.filter_panel.focused && app.filter_panel.row == row;
        let selection = app.filters.selection(*facet);
        let label_style = if focused {
            Style::default()
                .fg(app.theme.bg)
                .bg(app.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.primary_dim)
        };
        let value_style = if selection == crate::recipe::ANY {
            Style::default().fg(app.theme.text_dim)
        } else {
            Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!("{}:", facet.label()), label_style));
        spans.push(Span::styled(format!(" {}", selection), value_style));
    }

    let title = if app.filters.is_default() {
        "Filters [f]".to_string()
    } else {
        "Filters [f] (c clears)".to_string()
    };
    let border_style = if app.filter_panel.focused && !app.filter_panel.on_source_row() {
        Style::default().fg(app.theme.border_focus)
    } else {
        Style::default().fg(app.theme.border)
    };
    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_sources(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chips: Vec<Chip> = SOURCES
        .iter()
        .enumerate()
        .map(|(index, source)| Chip {
            label: format!("{} {}", source.emoji, source.name),
            active: app.filters.sources.iter().any(|s| s == source.name),
            focused: app.filter_panel.focused
                && app.filter_panel.on_source_row()
                && app.filter_panel.source_index == index,
        })
        .collect();

    let row = ChipRow {
        title: "Sources",
        chips: &chips,
        active_style: Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.primary_dim),
        inactive_style: Style::default().fg(app.theme.text_dim),
        focus_style: Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    };
    row.render(f, area);
}
