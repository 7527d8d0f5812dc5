/// Non-interactive questionnaire: answers come from flags, not keystrokes
use anyhow::{bail, Result};
use nextstep_core::{
    options::{INTEREST_OPTIONS, STRENGTH_OPTIONS},
    spawn_fetch, Advance, FetchOutcome, Recommendation, RecommendationService, WizardController,
};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AskInput {
    pub name: String,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskAnswer {
    pub name: String,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Walk the wizard through every step and wait for the recommendations.
///
/// Values are trimmed and lowercased, and repeats are skipped so a second
/// `--interest coding` never toggles the option back off.
pub fn run_ask(service: Arc<dyn RecommendationService>, input: &AskInput) -> Result<AskAnswer> {
    let mut wizard = WizardController::new();

    wizard.set_name(&input.name);
    if !matches!(wizard.advance(), Advance::Moved(_)) {
        bail!("Name must not be empty");
    }

    for interest in &input.interests {
        let interest = interest.trim().to_lowercase();
        if wizard.state().interests.contains(&interest) {
            continue;
        }
        if !wizard.toggle_interest(&interest) {
            bail!(
                "Unknown interest '{}'. Choose from: {}",
                interest,
                INTEREST_OPTIONS.join(", ")
            );
        }
    }
    if !matches!(wizard.advance(), Advance::Moved(_)) {
        bail!("Select at least one interest (--interest)");
    }

    for strength in &input.strengths {
        let strength = strength.trim().to_lowercase();
        if wizard.state().strengths.contains(&strength) {
            continue;
        }
        if !wizard.toggle_strength(&strength) {
            bail!(
                "Unknown strength '{}'. Choose from: {}",
                strength,
                STRENGTH_OPTIONS.join(", ")
            );
        }
    }
    let request = match wizard.advance() {
        Advance::FetchRequested(request) => request,
        _ => bail!("Select at least one strength (--strength)"),
    };

    match wizard.complete_fetch(spawn_fetch(service, request).wait()) {
        FetchOutcome::Succeeded { .. } => {
            let state = wizard.state();
            Ok(AskAnswer {
                name: state.name.clone(),
                interests: state.interests.to_vec(),
                strengths: state.strengths.to_vec(),
                recommendations: state.recommendations.clone(),
            })
        }
        FetchOutcome::Failed { message, error } => bail!("{} ({})", message, error.detail()),
        FetchOutcome::Ignored => bail!("Recommendation request was never issued"),
    }
}
