use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::action_plan::{build_action_plan, Recommendation};
use super::anthropometry::{round_to, Anthropometrics, BmiCategory, WhtrCategory};
use super::domain::{PatientProfile, Sex};
use super::evaluation::RiskAssessment;

pub const DEFAULT_PATIENT_NAME: &str = "Patient";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Complete screening outcome handed to rendering and export collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub patient_name: String,
    pub age: u32,
    pub sex: Sex,
    pub assessed_at: DateTime<Local>,
    /// Rounded to one decimal.
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Rounded to two decimals.
    pub whtr: f64,
    pub whtr_category: WhtrCategory,
    pub cardiovascular: RiskAssessment,
    pub colorectal: RiskAssessment,
    /// Cardiovascular alerts followed by colorectal alerts.
    pub alerts: Vec<String>,
    pub action_plan: Vec<Recommendation>,
    pub synthesis: String,
}

impl AnalysisResult {
    pub fn assessed_at_label(&self) -> String {
        self.assessed_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn action_plan_messages(&self) -> Vec<&'static str> {
        self.action_plan
            .iter()
            .map(|recommendation| recommendation.message())
            .collect()
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// Assemble the final record from already computed parts.
pub fn compose(
    profile: &PatientProfile,
    measures: &Anthropometrics,
    cardiovascular: RiskAssessment,
    colorectal: RiskAssessment,
    assessed_at: DateTime<Local>,
) -> AnalysisResult {
    let patient_name = match profile.name.trim() {
        "" => DEFAULT_PATIENT_NAME.to_string(),
        name => name.to_string(),
    };

    let bmi = round_to(measures.bmi, 1);
    let bmi_category = measures.bmi_category();
    let whtr = round_to(measures.whtr, 2);
    let whtr_category = measures.whtr_category();

    let alerts = cardiovascular
        .alerts
        .iter()
        .chain(colorectal.alerts.iter())
        .cloned()
        .collect();
    let action_plan = build_action_plan(profile, &cardiovascular, &colorectal);
    let synthesis = synthesis_sentence(
        bmi,
        bmi_category,
        whtr,
        whtr_category,
        &cardiovascular,
        &colorectal,
    );

    AnalysisResult {
        patient_name,
        age: profile.age,
        sex: profile.sex,
        assessed_at,
        bmi,
        bmi_category,
        whtr,
        whtr_category,
        cardiovascular,
        colorectal,
        alerts,
        action_plan,
        synthesis,
    }
}

fn synthesis_sentence(
    bmi: f64,
    bmi_category: BmiCategory,
    whtr: f64,
    whtr_category: WhtrCategory,
    cardiovascular: &RiskAssessment,
    colorectal: &RiskAssessment,
) -> String {
    format!(
        "BMI {:.1} ({}), WHtR {:.2} ({}). Cardiovascular risk {} (score {}) and colorectal risk {} (score {}).",
        bmi,
        bmi_category.label(),
        whtr,
        whtr_category.label(),
        cardiovascular.level_label,
        cardiovascular.score,
        colorectal.level_label,
        colorectal.score,
    )
}
