/// Final step: recommendation cards
use crate::components::{accent_color, border_style};
use nextstep_core::Recommendation;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

enum ResultsBody<'a> {
    Loading,
    Empty,
    List {
        name: &'a str,
        items: &'a [Recommendation],
    },
}

pub struct ResultsScreen<'a> {
    body: ResultsBody<'a>,
    scroll: u16,
    high_contrast: bool,
}

impl<'a> ResultsScreen<'a> {
    /// Only reached if Results is drawn mid-request; the wizard normally
    /// shows the loading dialog over the strengths step instead.
    pub fn loading() -> Self {
        Self::with_body(ResultsBody::Loading)
    }

    pub fn empty() -> Self {
        Self::with_body(ResultsBody::Empty)
    }

    pub fn list(name: &'a str, items: &'a [Recommendation]) -> Self {
        Self::with_body(ResultsBody::List { name, items })
    }

    fn with_body(body: ResultsBody<'a>) -> Self {
        Self {
            body,
            scroll: 0,
            high_contrast: false,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// Unwrapped line count of the list body: greeting, blank, then per card
    /// career, description, "Roadmap:", one line per step and a blank.
    pub fn content_lines(items: &[Recommendation]) -> usize {
        2 + items.iter().map(|rec| 4 + rec.roadmap.len()).sum::<usize>()
    }

    fn list_lines(&self, name: &str, items: &[Recommendation]) -> Vec<Line<'static>> {
        let accent = accent_color(self.high_contrast);
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Hi {}, here are your recommendations:", name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for rec in items {
            lines.push(Line::from(Span::styled(
                rec.career.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                rec.description.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                "Roadmap:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for step in &rec.roadmap {
                lines.push(Line::from(format!("  • {}", step)));
            }
            lines.push(Line::from(""));
        }

        lines
    }
}

impl<'a> Widget for ResultsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.high_contrast);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(Span::styled(
                " Recommendations ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let paragraph = match self.body {
            ResultsBody::Loading => Paragraph::new("Loading recommendations...")
                .alignment(Alignment::Center),
            ResultsBody::Empty => {
                Paragraph::new("No recommendations found. Try different inputs.")
                    .alignment(Alignment::Center)
            }
            ResultsBody::List { name, items } => Paragraph::new(self.list_lines(name, items))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
        };

        Widget::render(paragraph.block(block), area, buf);
    }
}
