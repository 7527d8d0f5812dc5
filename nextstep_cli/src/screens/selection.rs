/// Interest and strength selection steps
use crate::components::{accent_color, Checklist};
use nextstep_core::view::OptionRow;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct SelectionScreen<'a> {
    title: &'a str,
    prompt: &'a str,
    rows: &'a [OptionRow],
    cursor: usize,
    high_contrast: bool,
}

impl<'a> SelectionScreen<'a> {
    pub fn new(title: &'a str, prompt: &'a str, rows: &'a [OptionRow]) -> Self {
        Self {
            title,
            prompt,
            rows,
            cursor: 0,
            high_contrast: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for SelectionScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(self.rows.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(area);

        let selected = self.rows.iter().filter(|r| r.checked).count();
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled(
                self.prompt,
                Style::default()
                    .fg(accent_color(self.high_contrast))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} selected)", selected),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
        Widget::render(prompt, chunks[0], buf);

        let checklist = Checklist::new(self.title, self.rows)
            .cursor(self.cursor)
            .high_contrast(self.high_contrast);
        Widget::render(checklist, chunks[1], buf);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Space toggles the highlighted option",
            Style::default().add_modifier(Modifier::DIM),
        )));
        Widget::render(hint, chunks[2], buf);
    }
}
