/// Centralized keybindings and help text for the nextstep TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("type", "Enter your name (first step)"),
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("Space", "Toggle option"),
            ("Enter", "Next / Get Recommendations / Start Over"),
            ("←/S-Tab", "Back"),
            ("r", "Start over (results)"),
            ("t", "Toggle high-contrast"),
            ("?/F1", "Show help"),
            ("Esc", "Quit/Close"),
            ("Ctrl-C", "Quit"),
        ]
    }

    /// Ctrl-C quits from anywhere, even mid-input
    pub fn is_force_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode) -> bool {
        matches!(code, KeyCode::Esc)
    }

    /// `?` is ordinary text on the name step, F1 works everywhere
    pub fn is_help(code: KeyCode, typing: bool) -> bool {
        matches!(code, KeyCode::F(1)) || (!typing && matches!(code, KeyCode::Char('?')))
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    /// Check if key is confirm (Enter)
    pub fn is_confirm(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    /// Check if key dismisses an alert
    pub fn is_dismiss(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter | KeyCode::Esc)
    }

    /// Check if key is back; Backspace only counts off the name step
    pub fn is_back(code: KeyCode, typing: bool) -> bool {
        matches!(code, KeyCode::Left | KeyCode::BackTab)
            || (!typing && matches!(code, KeyCode::Backspace))
    }

    /// Check if key is space (for toggling checkboxes)
    pub fn is_space(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char(' '))
    }

    /// Check if key is start over
    pub fn is_start_over(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('r') | KeyCode::Enter)
    }

    /// Check if key is toggle theme
    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }
}
