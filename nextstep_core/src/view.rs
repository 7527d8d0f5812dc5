//! Pure mapping from wizard state to what should be on screen.

use crate::options::{display_label, SelectionSet};
use crate::types::Recommendation;
use crate::wizard::{Step, WizardState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub value: &'static str,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepView<'a> {
    NameEntry {
        name: &'a str,
    },
    Selection {
        prompt: &'static str,
        rows: Vec<OptionRow>,
    },
    /// Results while a request is in flight. The controller keeps the
    /// strengths step until the request settles, so this is a fallback.
    Loading,
    NoRecommendations,
    Recommendations {
        name: &'a str,
        items: &'a [Recommendation],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub back: Option<Control>,
    pub advance: Option<Control>,
    pub start_over: Option<Control>,
}

pub fn render(state: &WizardState) -> StepView<'_> {
    match state.step {
        Step::NameEntry => StepView::NameEntry { name: &state.name },
        Step::InterestSelect => StepView::Selection {
            prompt: "What are you interested in?",
            rows: rows(&state.interests),
        },
        Step::StrengthSelect => StepView::Selection {
            prompt: "What are your strengths?",
            rows: rows(&state.strengths),
        },
        Step::Results if state.is_loading => StepView::Loading,
        Step::Results if state.recommendations.is_empty() => StepView::NoRecommendations,
        Step::Results => StepView::Recommendations {
            name: &state.name,
            items: &state.recommendations,
        },
    }
}

fn rows(set: &SelectionSet) -> Vec<OptionRow> {
    set.options()
        .iter()
        .copied()
        .map(|option| OptionRow {
            value: option,
            label: display_label(option),
            checked: set.contains(option),
        })
        .collect()
}

pub fn controls(state: &WizardState) -> Controls {
    let idle = !state.is_loading;

    match state.step {
        Step::NameEntry => Controls {
            back: None,
            advance: Some(Control {
                label: "Next",
                enabled: idle && state.guard_met(),
            }),
            start_over: None,
        },
        Step::InterestSelect => Controls {
            back: Some(Control {
                label: "Back",
                enabled: idle,
            }),
            advance: Some(Control {
                label: "Next",
                enabled: idle && state.guard_met(),
            }),
            start_over: None,
        },
        Step::StrengthSelect => Controls {
            back: Some(Control {
                label: "Back",
                enabled: idle,
            }),
            advance: Some(Control {
                label: "Get Recommendations",
                enabled: idle && state.guard_met(),
            }),
            start_over: None,
        },
        Step::Results => Controls {
            back: None,
            advance: None,
            start_over: Some(Control {
                label: "Start Over",
                enabled: idle,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{INTEREST_OPTIONS, STRENGTH_OPTIONS};
    use proptest::prelude::*;

    fn state_at(step: Step) -> WizardState {
        WizardState {
            step,
            ..WizardState::new()
        }
    }

    #[test]
    fn test_name_view_shows_raw_name() {
        let mut state = WizardState::new();
        state.name = " Alice ".to_string();
        assert_eq!(render(&state), StepView::NameEntry { name: " Alice " });
    }

    #[test]
    fn test_selection_view_rows() {
        let mut state = state_at(Step::InterestSelect);
        state.interests.toggle("coding");

        let StepView::Selection { rows, .. } = render(&state) else {
            panic!("expected selection view");
        };
        assert_eq!(rows.len(), INTEREST_OPTIONS.len());
        assert_eq!(rows[0].label, "Technology");
        assert!(!rows[0].checked);
        let coding = rows.iter().find(|r| r.value == "coding").unwrap();
        assert!(coding.checked);
    }

    #[test]
    fn test_strength_labels_capitalized() {
        let state = state_at(Step::StrengthSelect);
        let StepView::Selection { rows, .. } = render(&state) else {
            panic!("expected selection view");
        };
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels[0], "Problem solving");
        assert_eq!(labels[5], "Strategic thinking");
        assert_eq!(labels.len(), STRENGTH_OPTIONS.len());
    }

    #[test]
    fn test_results_views() {
        let mut state = state_at(Step::Results);
        assert_eq!(render(&state), StepView::NoRecommendations);

        state.is_loading = true;
        assert_eq!(render(&state), StepView::Loading);

        state.is_loading = false;
        state.name = " Alice ".to_string();
        state.recommendations = vec![Recommendation {
            career: "Engineer".to_string(),
            description: "...".to_string(),
            roadmap: vec!["Learn math".to_string(), "Build projects".to_string()],
        }];
        match render(&state) {
            StepView::Recommendations { name, items } => {
                assert_eq!(name, " Alice ");
                assert_eq!(items[0].roadmap, vec!["Learn math", "Build projects"]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_controls_per_step() {
        let controls = controls(&state_at(Step::NameEntry));
        assert!(controls.back.is_none());
        assert_eq!(controls.advance.map(|c| c.label), Some("Next"));

        let controls = super::controls(&state_at(Step::StrengthSelect));
        assert_eq!(controls.back.map(|c| c.enabled), Some(true));
        assert_eq!(
            controls.advance.map(|c| c.label),
            Some("Get Recommendations")
        );

        let controls = super::controls(&state_at(Step::Results));
        assert!(controls.back.is_none());
        assert!(controls.advance.is_none());
        assert_eq!(controls.start_over.map(|c| c.enabled), Some(true));
    }

    #[test]
    fn test_loading_disables_every_control() {
        let mut state = state_at(Step::StrengthSelect);
        state.strengths.toggle("logic");
        state.is_loading = true;

        let c = controls(&state);
        assert_eq!(c.back.map(|c| c.enabled), Some(false));
        assert_eq!(c.advance.map(|c| c.enabled), Some(false));

        state.step = Step::Results;
        assert_eq!(controls(&state).start_over.map(|c| c.enabled), Some(false));
    }

    proptest! {
        #[test]
        fn prop_advance_disabled_iff_guard_unmet(
            step_idx in 0usize..3,
            name in "[ a-z]{0,6}",
            interests in proptest::collection::vec(0..INTEREST_OPTIONS.len(), 0..4),
            strengths in proptest::collection::vec(0..STRENGTH_OPTIONS.len(), 0..4),
        ) {
            let mut state = state_at(Step::ALL[step_idx]);
            state.name = name.clone();
            for i in interests {
                state.interests.toggle(INTEREST_OPTIONS[i]);
            }
            for i in strengths {
                state.strengths.toggle(STRENGTH_OPTIONS[i]);
            }

            let guard = match state.step {
                Step::NameEntry => !name.trim().is_empty(),
                Step::InterestSelect => !state.interests.is_empty(),
                _ => !state.strengths.is_empty(),
            };
            let enabled = controls(&state).advance.map(|c| c.enabled);
            prop_assert_eq!(enabled, Some(guard));
        }
    }
}
