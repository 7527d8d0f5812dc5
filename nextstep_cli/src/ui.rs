use crate::components::{accent_color, border_style, ChecklistState, ControlsBar, Dialog, Stepper};
/// Top-level TUI event loop and input handler
use crate::keymap::KeyMap;
use crate::screens::{NameScreen, ResultsScreen, SelectionScreen};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nextstep_core::{
    options::{INTEREST_OPTIONS, STRENGTH_OPTIONS},
    spawn_fetch,
    view::{self, StepView},
    Advance, FetchHandle, FetchOutcome, FetchResult, RecommendationService, Step,
    WizardController, APP_TITLE,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    /// Operator diagnostic shown under the message
    pub detail: Option<String>,
}

impl Modal {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: None,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

pub struct AppState {
    wizard: WizardController,
    service: Arc<dyn RecommendationService>,
    pending: Option<FetchHandle>,
    checklist: ChecklistState,
    results_scroll: u16,
    modal_stack: Vec<Modal>,
    show_help: bool,
    high_contrast: bool,
    should_quit: bool,
}

impl AppState {
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self {
            wizard: WizardController::new(),
            service,
            pending: None,
            checklist: ChecklistState::new(),
            results_scroll: 0,
            modal_stack: Vec::new(),
            show_help: false,
            high_contrast: false,
            should_quit: false,
        }
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn checklist_cursor(&self) -> usize {
        self.checklist.cursor
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn showing_help(&self) -> bool {
        self.show_help
    }

    pub fn current_modal(&self) -> Option<&Modal> {
        self.modal_stack.last()
    }

    fn push_modal(&mut self, modal: Modal) {
        self.modal_stack.push(modal);
    }

    fn pop_modal(&mut self) {
        self.modal_stack.pop();
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if KeyMap::is_force_quit(code, modifiers) {
            self.should_quit = true;
            return;
        }

        // Alerts block everything else until acknowledged
        if self.current_modal().is_some() {
            if KeyMap::is_dismiss(code) {
                self.pop_modal();
            }
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        if KeyMap::is_quit(code) {
            self.should_quit = true;
            return;
        }

        let typing = self.wizard.step() == Step::NameEntry;
        if KeyMap::is_help(code, typing) {
            self.show_help = true;
            return;
        }

        match self.wizard.step() {
            Step::NameEntry => self.handle_name_key(code, modifiers),
            Step::InterestSelect | Step::StrengthSelect => self.handle_selection_key(code),
            Step::Results => self.handle_results_key(code),
        }
    }

    fn handle_name_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Enter => self.advance(),
            KeyCode::Backspace => {
                self.wizard.pop_name_char();
            }
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.wizard.push_name_char(c);
            }
            _ => {}
        }
    }

    fn handle_selection_key(&mut self, code: KeyCode) {
        let options = self.current_options();

        if KeyMap::is_down(code) {
            self.checklist.move_down(options.len());
        } else if KeyMap::is_up(code) {
            self.checklist.move_up();
        } else if KeyMap::is_space(code) {
            if let Some(item) = options.get(self.checklist.cursor) {
                match self.wizard.step() {
                    Step::InterestSelect => self.wizard.toggle_interest(item),
                    _ => self.wizard.toggle_strength(item),
                };
            }
        } else if KeyMap::is_confirm(code) {
            self.advance();
        } else if KeyMap::is_back(code, false) {
            if self.wizard.back() {
                self.checklist.reset();
            }
        } else if KeyMap::is_toggle_theme(code) {
            self.high_contrast = !self.high_contrast;
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            if self.results_scroll < self.max_results_scroll() {
                self.results_scroll += 1;
            }
        } else if KeyMap::is_up(code) {
            self.results_scroll = self.results_scroll.saturating_sub(1);
        } else if KeyMap::is_start_over(code) {
            if self.wizard.start_over() {
                self.checklist.reset();
                self.results_scroll = 0;
            }
        } else if KeyMap::is_toggle_theme(code) {
            self.high_contrast = !self.high_contrast;
        }
    }

    /// Last line of the results body stays on screen
    fn max_results_scroll(&self) -> u16 {
        let lines = ResultsScreen::content_lines(&self.wizard.state().recommendations);
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn current_options(&self) -> &'static [&'static str] {
        match self.wizard.step() {
            Step::InterestSelect => INTEREST_OPTIONS,
            Step::StrengthSelect => STRENGTH_OPTIONS,
            Step::NameEntry | Step::Results => &[],
        }
    }

    fn advance(&mut self) {
        match self.wizard.advance() {
            Advance::Moved(_) => self.checklist.reset(),
            Advance::FetchRequested(request) => {
                self.pending = Some(spawn_fetch(self.service.clone(), request));
            }
            Advance::Blocked => {}
        }
    }

    /// Pick up a finished request, if any. Returns true once it has settled.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(handle) = &self.pending else {
            return false;
        };
        let Some(result) = handle.poll() else {
            return false;
        };

        self.pending = None;
        self.apply_fetch_result(result);
        true
    }

    fn apply_fetch_result(&mut self, result: FetchResult) {
        match self.wizard.complete_fetch(result) {
            FetchOutcome::Succeeded { .. } => self.results_scroll = 0,
            FetchOutcome::Failed { message, error } => {
                self.push_modal(Modal::new("Error", message).with_detail(error.detail()))
            }
            FetchOutcome::Ignored => {}
        }
    }
}

pub fn run_tui(service: Arc<dyn RecommendationService>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(service);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        app.poll_fetch();

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }

    if app.is_fetching() {
        log::warn!("[TUI] Exiting with a recommendation request still in flight");
    }
    Ok(())
}

/// Render the whole wizard for the current state
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let state = app.wizard.state();
    let high_contrast = app.high_contrast;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(accent_color(high_contrast))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    f.render_widget(Stepper::new(state.step).high_contrast(high_contrast), chunks[1]);

    match view::render(state) {
        StepView::NameEntry { name } => {
            f.render_widget(NameScreen::new(name).high_contrast(high_contrast), chunks[2]);
        }
        StepView::Selection { prompt, rows } => {
            let screen = SelectionScreen::new(state.step.label(), prompt, &rows)
                .cursor(app.checklist.cursor)
                .high_contrast(high_contrast);
            f.render_widget(screen, chunks[2]);
        }
        StepView::Loading => {
            f.render_widget(ResultsScreen::loading().high_contrast(high_contrast), chunks[2]);
        }
        StepView::NoRecommendations => {
            f.render_widget(ResultsScreen::empty().high_contrast(high_contrast), chunks[2]);
        }
        StepView::Recommendations { name, items } => {
            let screen = ResultsScreen::list(name, items)
                .scroll(app.results_scroll)
                .high_contrast(high_contrast);
            f.render_widget(screen, chunks[2]);
        }
    }

    f.render_widget(
        ControlsBar::new(view::controls(state)).high_contrast(high_contrast),
        chunks[3],
    );

    if state.is_loading {
        f.render_widget(
            Dialog::new("Please wait", "Loading recommendations...").high_contrast(high_contrast),
            area,
        );
    }

    if app.show_help {
        render_help(f, area, high_contrast);
    }

    // Render modal stack (failure alerts)
    if let Some(modal) = app.current_modal() {
        let dialog = Dialog::new(&modal.title, &modal.message)
            .detail(modal.detail.as_deref())
            .hint("[Enter] OK")
            .high_contrast(high_contrast);
        f.render_widget(dialog, area);
    }
}

fn render_help(f: &mut Frame, area: Rect, high_contrast: bool) {
    let accent = accent_color(high_contrast);

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(high_contrast))
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in KeyMap::help_text() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}
