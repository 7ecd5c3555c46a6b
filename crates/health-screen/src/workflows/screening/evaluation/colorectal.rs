use super::super::domain::{PatientProfile, ScreeningRecency};
use super::{RiskAssessment, RiskDomain, RiskFactor, Scorecard};

pub(crate) const BLOOD_IN_STOOL_ALERT: &str =
    "blood in stool reported: priority medical evaluation.";

/// Score the colorectal rubric. Independent of the cardiovascular rubric and of body
/// measurements.
pub fn score_colorectal(profile: &PatientProfile) -> RiskAssessment {
    let mut card = Scorecard::new(RiskDomain::Colorectal);

    if profile.age >= 60 {
        card.award(true, RiskFactor::Age, 3, "age 60 or over");
    } else if profile.age >= 50 {
        card.award(true, RiskFactor::Age, 2, "age 50 to 59");
    }

    card.award(
        profile.colon_family_history,
        RiskFactor::ColonFamilyHistory,
        3,
        "family history of colorectal cancer",
    );
    card.award(
        profile.digestive_symptoms,
        RiskFactor::DigestiveSymptoms,
        3,
        "persistent digestive symptoms",
    );

    if profile.blood_in_stool {
        card.award(true, RiskFactor::BloodInStool, 5, "blood in stool");
        card.alert(BLOOD_IN_STOOL_ALERT);
    }

    match profile.colon_screening {
        ScreeningRecency::Never => {
            card.award(true, RiskFactor::ScreeningGap, 3, "no previous screening")
        }
        ScreeningRecency::OverTwoYears => {
            card.award(true, RiskFactor::ScreeningGap, 2, "screening overdue")
        }
        ScreeningRecency::Recent => {}
    }

    card.award(
        profile.low_fiber_diet,
        RiskFactor::LowFiber,
        1,
        "low-fibre diet",
    );
    card.award(
        profile.processed_meat,
        RiskFactor::ProcessedMeat,
        1,
        "regular processed meat consumption",
    );

    card.finish()
}
