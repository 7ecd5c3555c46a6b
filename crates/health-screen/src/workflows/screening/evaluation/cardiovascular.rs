use super::super::anthropometry::Anthropometrics;
use super::super::domain::{AlcoholUse, PatientProfile, Sex};
use super::{RiskAssessment, RiskDomain, RiskFactor, Scorecard};

pub(crate) const ALARM_SYMPTOMS_ALERT: &str =
    "cardiovascular alarm symptoms present: urgent medical referral.";

const MALE_ABDOMINAL_WAIST_CM: f64 = 102.0;
const FEMALE_ABDOMINAL_WAIST_CM: f64 = 88.0;

/// Score the cardiovascular rubric. Rules are evaluated in a fixed order so the
/// contribution trail always reads the same way for the same answers.
pub fn score_cardiovascular(
    profile: &PatientProfile,
    measures: &Anthropometrics,
) -> RiskAssessment {
    let mut card = Scorecard::new(RiskDomain::Cardiovascular);
    let age = profile.age;
    let male = profile.sex == Sex::Male;
    let female = profile.sex == Sex::Female;

    if (male && age >= 65) || (female && age >= 75) {
        card.award(true, RiskFactor::Age, 3, "very high-risk age");
    } else if (male && age >= 55) || (female && age >= 65) {
        card.award(true, RiskFactor::Age, 2, "high-risk age");
    } else if (male && age >= 45) || (female && age >= 55) {
        card.award(true, RiskFactor::Age, 1, "intermediate-risk age");
    }

    card.award(profile.smoker, RiskFactor::Smoking, 3, "active smoking");
    card.award(
        profile.hypertension,
        RiskFactor::Hypertension,
        3,
        "known hypertension",
    );
    card.award(profile.diabetes, RiskFactor::Diabetes, 4, "diabetes");
    card.award(
        profile.high_cholesterol,
        RiskFactor::Cholesterol,
        2,
        "known high cholesterol",
    );
    card.award(
        profile.cardio_family_history,
        RiskFactor::CardioFamilyHistory,
        2,
        "early family history of cardiovascular disease",
    );
    card.award(profile.sedentary, RiskFactor::Sedentary, 2, "sedentary lifestyle");

    match profile.alcohol {
        AlcoholUse::Excessive => card.award(true, RiskFactor::Alcohol, 2, "excessive alcohol use"),
        AlcoholUse::Moderate => card.award(true, RiskFactor::Alcohol, 1, "moderate alcohol use"),
        AlcoholUse::None => {}
    }

    let bmi = measures.bmi;
    if bmi >= 35.0 {
        card.award(true, RiskFactor::BodyMassIndex, 3, "BMI >= 35");
    } else if bmi >= 30.0 {
        card.award(true, RiskFactor::BodyMassIndex, 2, "BMI 30-34.9");
    } else if bmi >= 25.0 {
        card.award(true, RiskFactor::BodyMassIndex, 1, "BMI 25-29.9");
    }

    let abdominal_threshold = match profile.sex {
        Sex::Male => MALE_ABDOMINAL_WAIST_CM,
        Sex::Female => FEMALE_ABDOMINAL_WAIST_CM,
    };
    card.award(
        profile.waist_cm >= abdominal_threshold,
        RiskFactor::AbdominalObesity,
        2,
        "abdominal obesity",
    );

    if measures.whtr >= 0.6 {
        card.award(
            true,
            RiskFactor::WaistToHeight,
            2,
            "high waist-to-height ratio",
        );
    } else if measures.whtr >= 0.5 {
        card.award(
            true,
            RiskFactor::WaistToHeight,
            1,
            "intermediate waist-to-height ratio",
        );
    }

    if profile.cardio_alarm_symptoms {
        card.award(
            true,
            RiskFactor::CardioAlarmSymptoms,
            5,
            "cardiovascular alarm symptoms",
        );
        card.alert(ALARM_SYMPTOMS_ALERT);
    }

    card.finish()
}
