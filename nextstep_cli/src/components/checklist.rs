/// Checkbox list component for interest/strength selection
use super::{accent_color, border_style};
use nextstep_core::view::OptionRow;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

#[derive(Debug, Clone, Default)]
pub struct ChecklistState {
    pub cursor: usize,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

pub struct Checklist<'a> {
    title: &'a str,
    rows: &'a [OptionRow],
    cursor: usize,
    high_contrast: bool,
}

impl<'a> Checklist<'a> {
    pub fn new(title: &'a str, rows: &'a [OptionRow]) -> Self {
        Self {
            title,
            rows,
            cursor: 0,
            high_contrast: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor.min(self.rows.len().saturating_sub(1));
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for Checklist<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.high_contrast);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let checkbox = if row.checked { "[x]" } else { "[ ]" };
                let marker = if idx == self.cursor { ">" } else { " " };
                let style = if idx == self.cursor {
                    Style::default()
                        .fg(accent)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                Line::from(vec![
                    Span::styled(format!("{} {} ", marker, checkbox), style),
                    Span::styled(row.label.clone(), style),
                ])
            })
            .collect();

        Widget::render(Paragraph::new(lines), inner, buf);
    }
}
