//! Toggle chip row widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct Chip {
    pub label: String,
    pub active: bool,
    pub focused: bool,
}

pub struct ChipRow<'a> {
    pub title: &'a str,
    pub chips: &'a [Chip],
    pub active_style: Style,
    pub inactive_style: Style,
    pub focus_style: Style,
}

impl<'a> ChipRow<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let spans: Vec<Span> = self
            .chips
            .iter()
            .map(|chip| {
                let style = if chip.focused {
                    self.focus_style
                } else if chip.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                let marker = if chip.active { "●" } else { "○" };
                Span::styled(format!(" {} {} ", marker, chip.label), style)
            })
            .collect();

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
