/// Centered pop-up used for the loading notice and failure alerts
use super::accent_color;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct Dialog<'a> {
    title: &'a str,
    message: &'a str,
    detail: Option<&'a str>,
    hint: Option<&'a str>,
    high_contrast: bool,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            detail: None,
            hint: None,
            high_contrast: false,
        }
    }

    /// Secondary line under the message, dimmed
    pub fn detail(mut self, detail: Option<&'a str>) -> Self {
        self.detail = detail;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// Middle 60% x 40% of `area`
    pub fn frame(area: Rect) -> Rect {
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .areas(area);
        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .areas(middle);
        center
    }
}

impl<'a> Widget for Dialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.high_contrast);
        let frame = Self::frame(area);

        Clear.render(frame, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        let mut lines = vec![Line::from(self.message)];
        if let Some(detail) = self.detail {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                detail,
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            )));
        }
        if let Some(hint) = self.hint {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                hint,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(frame, buf);
    }
}
