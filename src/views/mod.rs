//! View rendering dispatch.

pub mod filters;
pub mod helpers;
pub mod inspire;
pub mod library;

use crate::nav::Tab;
use crate::notifications::NotificationLevel;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    filters::render(f, app, layout[1]);

    match app.active_tab {
        Tab::Inspire => inspire::render(f, app, layout[2]),
        Tab::Library => library::render(f, app, layout[2]),
    }

    render_footer(f, app, layout[3]);

    if app.help_visible {
        render_help(f, app);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "🐔 CHICK FEED",
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    )];

    for tab in Tab::all() {
        spans.push(Span::styled("  |  ", Style::default().fg(app.theme.border)));
        let label = match tab {
            Tab::Inspire => tab.title().to_string(),
            Tab::Library => format!("{} ({})", tab.title(), app.library_total()),
        };
        let style = if *tab == app.active_tab {
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(label, style));
    }

    if app.loading {
        spans.push(Span::styled(
            "  |  Loading recipes...",
            Style::default().fg(app.theme.secondary),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = if app.filter_panel.focused {
        "h/l facet • j/k value • Space toggle source • c clear • Esc back • q quit"
    } else {
        "j/k move • Tab switch tab • f filters • s save • r refresh • ? help • q quit"
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "OK",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_help(f: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 50, f.size());
    let lines = vec![
        Line::from("Tab / BackTab   switch between Inspire Me and My Library"),
        Line::from("j / k           move through the recipe list"),
        Line::from("f               focus the filter panel"),
        Line::from("  h / l         choose a facet (or the source row)"),
        Line::from("  j / k         cycle the facet value or step the chips"),
        Line::from("  Space         toggle the highlighted source chip"),
        Line::from("c               clear all filters"),
        Line::from("r               refresh both feeds"),
        Line::from("s               save (decorative; nothing is written)"),
        Line::from("q               quit"),
    ];
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Keybindings")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
