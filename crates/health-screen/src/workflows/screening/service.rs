use chrono::{DateTime, Local};
use tracing::debug;

use super::anthropometry::Anthropometrics;
use super::domain::{PatientProfile, RawAnswers};
use super::evaluation::{score_cardiovascular, score_colorectal};
use super::intake::{CategoricalPolicy, IntakeGuard, ValidationError};
use super::report::{compose, AnalysisResult};

/// Service composing the intake guard with both scoring rubrics. Holds no mutable state,
/// so one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ScreeningService {
    guard: IntakeGuard,
}

impl ScreeningService {
    pub fn new(policy: CategoricalPolicy) -> Self {
        Self::with_guard(IntakeGuard::with_policy(policy))
    }

    pub fn with_guard(guard: IntakeGuard) -> Self {
        Self { guard }
    }

    pub fn guard(&self) -> &IntakeGuard {
        &self.guard
    }

    /// Validate and assess a questionnaire, stamping the result with the current time.
    pub fn assess(&self, answers: &RawAnswers) -> Result<AnalysisResult, ScreeningError> {
        self.assess_at(answers, Local::now())
    }

    pub fn assess_at(
        &self,
        answers: &RawAnswers,
        assessed_at: DateTime<Local>,
    ) -> Result<AnalysisResult, ScreeningError> {
        let profile = self.guard.profile_from_answers(answers)?;
        Ok(evaluate(&profile, assessed_at))
    }

    /// Assess each questionnaire independently; results keep the input order.
    pub fn assess_batch(
        &self,
        batch: &[RawAnswers],
    ) -> Vec<Result<AnalysisResult, ScreeningError>> {
        let assessed_at = Local::now();
        batch
            .iter()
            .map(|answers| self.assess_at(answers, assessed_at))
            .collect()
    }
}

/// Run the scoring pipeline on an already validated profile.
pub fn evaluate(profile: &PatientProfile, assessed_at: DateTime<Local>) -> AnalysisResult {
    let measures = Anthropometrics::from_profile(profile);
    let cardiovascular = score_cardiovascular(profile, &measures);
    let colorectal = score_colorectal(profile);

    debug!(
        cardiovascular_score = cardiovascular.score,
        cardiovascular_level = ?cardiovascular.level,
        colorectal_score = colorectal.score,
        colorectal_level = ?colorectal.level,
        alerts = cardiovascular.alerts.len() + colorectal.alerts.len(),
        "questionnaire assessed"
    );

    compose(profile, &measures, cardiovascular, colorectal, assessed_at)
}

/// Error raised by the screening service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
