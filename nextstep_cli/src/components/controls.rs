/// Footer showing the wizard's action buttons
use super::accent_color;
use nextstep_core::view::{Control, Controls};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct ControlsBar {
    controls: Controls,
    high_contrast: bool,
}

impl ControlsBar {
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            high_contrast: false,
        }
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    fn button(&self, key: &str, control: Control) -> Vec<Span<'static>> {
        let style = if control.enabled {
            Style::default()
                .fg(accent_color(self.high_contrast))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        vec![
            Span::styled(format!("[{}] ", key), Style::default().add_modifier(Modifier::DIM)),
            Span::styled(control.label.to_string(), style),
            Span::raw("   "),
        ]
    }
}

impl Widget for ControlsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if let Some(back) = self.controls.back {
            spans.extend(self.button("←", back));
        }
        if let Some(advance) = self.controls.advance {
            spans.extend(self.button("Enter", advance));
        }
        if let Some(start_over) = self.controls.start_over {
            spans.extend(self.button("Enter/r", start_over));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        Widget::render(paragraph, area, buf);
    }
}
