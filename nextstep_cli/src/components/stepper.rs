/// Step progress header
use super::{accent_color, border_style};
use nextstep_core::Step;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Stepper {
    active: Step,
    high_contrast: bool,
}

impl Stepper {
    pub fn new(active: Step) -> Self {
        Self {
            active,
            high_contrast: false,
        }
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl Widget for Stepper {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.high_contrast);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast));
        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut spans = Vec::new();
        for step in Step::ALL {
            if step.index() > 0 {
                spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
            }

            let (marker, style) = if step == self.active {
                (
                    (step.index() + 1).to_string(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )
            } else if step.index() < self.active.index() {
                ("✓".to_string(), Style::default().fg(Color::Green))
            } else {
                (
                    (step.index() + 1).to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                )
            };

            spans.push(Span::styled(format!("{} {}", marker, step.label()), style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        Widget::render(paragraph, inner, buf);
    }
}
