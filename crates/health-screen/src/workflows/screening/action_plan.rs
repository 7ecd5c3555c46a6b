use serde::{Deserialize, Serialize};

use super::domain::PatientProfile;
use super::evaluation::RiskAssessment;

/// Recommendations the action plan can contain, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    SmokingCessation,
    PhysicalActivity,
    FiberIntake,
    ProcessedMeat,
    MetabolicFollowUp,
    CardiovascularWorkup,
    ColorectalScreening,
    MaintainHabits,
}

impl Recommendation {
    pub const fn message(self) -> &'static str {
        match self {
            Recommendation::SmokingCessation => {
                "Smoking cessation plan over 4 to 8 weeks with medical or pharmacist support."
            }
            Recommendation::PhysicalActivity => {
                "Progressive goal: 150 minutes of moderate physical activity per week."
            }
            Recommendation::FiberIntake => {
                "Increase dietary fibre: vegetables, fruit, legumes, whole grains."
            }
            Recommendation::ProcessedMeat => {
                "Reduce cured and processed meat consumption to a minimum."
            }
            Recommendation::MetabolicFollowUp => {
                "Quarterly blood pressure, glucose and lipid follow-up with the primary care physician."
            }
            Recommendation::CardiovascularWorkup => {
                "Schedule a medical cardiovascular workup within the coming weeks."
            }
            Recommendation::ColorectalScreening => {
                "Promptly discuss colorectal screening (immunochemical test or colonoscopy as indicated)."
            }
            Recommendation::MaintainHabits => {
                "Maintain protective habits and repeat the assessment in 6 to 12 months."
            }
        }
    }
}

/// Build the recommendation list from individual risk flags and both domain levels.
/// Never empty: falls back to the maintenance recommendation.
pub fn build_action_plan(
    profile: &PatientProfile,
    cardiovascular: &RiskAssessment,
    colorectal: &RiskAssessment,
) -> Vec<Recommendation> {
    let triggers = [
        (profile.smoker, Recommendation::SmokingCessation),
        (profile.sedentary, Recommendation::PhysicalActivity),
        (profile.low_fiber_diet, Recommendation::FiberIntake),
        (profile.processed_meat, Recommendation::ProcessedMeat),
        (
            profile.has_metabolic_condition(),
            Recommendation::MetabolicFollowUp,
        ),
        (
            cardiovascular.is_high_or_above(),
            Recommendation::CardiovascularWorkup,
        ),
        (
            colorectal.is_high_or_above(),
            Recommendation::ColorectalScreening,
        ),
    ];

    let plan: Vec<Recommendation> = triggers
        .into_iter()
        .filter_map(|(triggered, recommendation)| triggered.then_some(recommendation))
        .collect();

    if plan.is_empty() {
        vec![Recommendation::MaintainHabits]
    } else {
        plan
    }
}
