//! Questionnaire state machine.
//!
//! The controller owns every piece of collected input. Transitions are gated
//! by guard conditions, and the StrengthSelect -> Results transition only
//! completes once the recommendation fetch settles successfully.

use crate::error::{RecommendationError, FETCH_FAILED_MESSAGE};
use crate::options::SelectionSet;
use crate::types::{Recommendation, RecommendationRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    NameEntry,
    InterestSelect,
    StrengthSelect,
    Results,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::NameEntry,
        Step::InterestSelect,
        Step::StrengthSelect,
        Step::Results,
    ];

    pub fn index(self) -> usize {
        match self {
            Step::NameEntry => 0,
            Step::InterestSelect => 1,
            Step::StrengthSelect => 2,
            Step::Results => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::NameEntry => "Your Name",
            Step::InterestSelect => "Select Interests",
            Step::StrengthSelect => "Select Strengths",
            Step::Results => "Recommendations",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::NameEntry => Some(Step::InterestSelect),
            Step::InterestSelect => Some(Step::StrengthSelect),
            Step::StrengthSelect => Some(Step::Results),
            Step::Results => None,
        }
    }

    fn previous(self) -> Option<Step> {
        match self {
            Step::InterestSelect => Some(Step::NameEntry),
            Step::StrengthSelect => Some(Step::InterestSelect),
            Step::NameEntry | Step::Results => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    /// Stored exactly as typed; trimming only applies to the guard
    pub name: String,
    pub interests: SelectionSet,
    pub strengths: SelectionSet,
    pub recommendations: Vec<Recommendation>,
    pub is_loading: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::NameEntry,
            name: String::new(),
            interests: SelectionSet::interests(),
            strengths: SelectionSet::strengths(),
            recommendations: Vec::new(),
            is_loading: false,
        }
    }

    /// Whether the current step's input allows moving forward
    pub fn guard_met(&self) -> bool {
        match self.step {
            Step::NameEntry => !self.name.trim().is_empty(),
            Step::InterestSelect => !self.interests.is_empty(),
            Step::StrengthSelect => !self.strengths.is_empty(),
            Step::Results => false,
        }
    }

    pub fn request(&self) -> RecommendationRequest {
        RecommendationRequest {
            name: self.name.clone(),
            interests: self.interests.to_vec(),
            strengths: self.strengths.to_vec(),
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// What pressing the advancing control did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    /// The caller must run this request and report back via `complete_fetch`
    FetchRequested(RecommendationRequest),
    Blocked,
}

/// How a settled fetch was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Succeeded { count: usize },
    /// `message` is the user-facing notification
    Failed { message: String, error: RecommendationError },
    /// No fetch was in flight
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if self.state.step != Step::NameEntry {
            return false;
        }
        self.state.name = name.into();
        true
    }

    pub fn push_name_char(&mut self, c: char) -> bool {
        if self.state.step != Step::NameEntry || c.is_control() {
            return false;
        }
        self.state.name.push(c);
        true
    }

    pub fn pop_name_char(&mut self) -> bool {
        if self.state.step != Step::NameEntry {
            return false;
        }
        self.state.name.pop().is_some()
    }

    pub fn toggle_interest(&mut self, item: &str) -> bool {
        self.state.interests.toggle(item)
    }

    pub fn toggle_strength(&mut self, item: &str) -> bool {
        self.state.strengths.toggle(item)
    }

    pub fn can_advance(&self) -> bool {
        !self.state.is_loading && self.state.guard_met()
    }

    pub fn can_go_back(&self) -> bool {
        !self.state.is_loading && self.state.step.previous().is_some()
    }

    pub fn can_start_over(&self) -> bool {
        !self.state.is_loading && self.state.step == Step::Results
    }

    /// "Next" / "Get Recommendations".
    ///
    /// From StrengthSelect this marks the fetch in flight and hands the request
    /// back; the step itself does not move yet.
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            log::debug!("[WIZARD] Advance blocked at {:?}", self.state.step);
            return Advance::Blocked;
        }

        match self.state.step {
            Step::StrengthSelect => {
                self.state.is_loading = true;
                log::info!("[WIZARD] Submitting questionnaire");
                Advance::FetchRequested(self.state.request())
            }
            step => match step.next() {
                Some(next) => {
                    self.state.step = next;
                    log::debug!("[WIZARD] {:?} -> {:?}", step, next);
                    Advance::Moved(next)
                }
                None => Advance::Blocked,
            },
        }
    }

    /// "Back". Keeps everything entered so far.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        match self.state.step.previous() {
            Some(previous) => {
                log::debug!("[WIZARD] {:?} -> {:?}", self.state.step, previous);
                self.state.step = previous;
                true
            }
            None => false,
        }
    }

    /// Apply the settled result of the request returned by `advance`
    pub fn complete_fetch(
        &mut self,
        result: Result<Vec<Recommendation>, RecommendationError>,
    ) -> FetchOutcome {
        if !self.state.is_loading {
            log::warn!("[WIZARD] Ignoring fetch completion with no request in flight");
            return FetchOutcome::Ignored;
        }
        self.state.is_loading = false;

        match result {
            Ok(recommendations) => {
                let count = recommendations.len();
                self.state.recommendations = recommendations;
                self.state.step = Step::Results;
                log::info!("[WIZARD] Received {} recommendations", count);
                FetchOutcome::Succeeded { count }
            }
            Err(error) => {
                log::error!("[WIZARD] {}", error);
                FetchOutcome::Failed {
                    message: FETCH_FAILED_MESSAGE.to_string(),
                    error,
                }
            }
        }
    }

    /// "Start Over"
    pub fn start_over(&mut self) -> bool {
        if !self.can_start_over() {
            return false;
        }
        self.state = WizardState::new();
        log::debug!("[WIZARD] Reset to {:?}", self.state.step);
        true
    }
}
