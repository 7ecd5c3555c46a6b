//! Questionnaire intake, cardiovascular and colorectal scoring, and result composition.
//!
//! The pipeline is pure: raw answers are validated into a `PatientProfile`, body measurements
//! are derived, both rubrics are scored independently, and the parts are composed into an
//! `AnalysisResult` together with an action plan and a one-sentence synthesis.

pub mod action_plan;
pub mod anthropometry;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod report;
pub mod service;

#[cfg(test)]
mod tests;

pub use action_plan::{build_action_plan, Recommendation};
pub use anthropometry::{Anthropometrics, BmiCategory, WhtrCategory};
pub use domain::{
    AlcoholUse, PatientProfile, QuestionnaireField, RawAnswers, ScreeningRecency, Sex,
};
pub use evaluation::{
    score_cardiovascular, score_colorectal, RiskAssessment, RiskDomain, RiskFactor, RiskLevel,
    ScoreComponent,
};
pub use intake::{CategoricalPolicy, IntakeGuard, ValidationError};
pub use report::{compose, AnalysisResult, DEFAULT_PATIENT_NAME};
pub use service::{evaluate, ScreeningError, ScreeningService};
