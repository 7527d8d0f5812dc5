/// First step: free-text name input
use crate::components::accent_color;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct NameScreen<'a> {
    name: &'a str,
    high_contrast: bool,
}

impl<'a> NameScreen<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            high_contrast: false,
        }
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for NameScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.high_contrast);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                " Enter your name ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let input = Paragraph::new(Line::from(vec![
            Span::raw(self.name),
            Span::styled("█", Style::default().fg(accent)),
        ]))
        .block(block);
        Widget::render(input, chunks[0], buf);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Type your name, then press Enter",
            Style::default().add_modifier(Modifier::DIM),
        )));
        Widget::render(hint, chunks[1], buf);
    }
}
