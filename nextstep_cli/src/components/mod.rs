pub mod checklist;
pub mod controls;
/// Component module exports
pub mod dialog;
pub mod stepper;

pub use checklist::{Checklist, ChecklistState};
pub use controls::ControlsBar;
pub use dialog::Dialog;
pub use stepper::Stepper;

use ratatui::style::{Color, Style};

/// Teal #2DD4BF, or plain white in high-contrast mode
pub fn accent_color(high_contrast: bool) -> Color {
    if high_contrast {
        Color::White
    } else {
        Color::Rgb(45, 212, 191)
    }
}

pub fn border_style(high_contrast: bool) -> Style {
    if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
