use chrono::{DateTime, Local, TimeZone};

use crate::workflows::screening::anthropometry::Anthropometrics;
use crate::workflows::screening::domain::{PatientProfile, QuestionnaireField, RawAnswers};
use crate::workflows::screening::evaluation::{
    score_cardiovascular, score_colorectal, RiskAssessment,
};
use crate::workflows::screening::intake::IntakeGuard;

/// Thirty-year-old with protective answers everywhere: no rule should fire.
pub(super) fn baseline_answers() -> RawAnswers {
    RawAnswers::from_pairs([
        ("nom_patient", "Claire Martin"),
        ("age", "30"),
        ("sexe", "femme"),
        ("poids", "70"),
        ("taille", "175"),
        ("tour_taille", "80"),
        ("tabac", "non"),
        ("hypertension", "non"),
        ("diabete", "non"),
        ("cholesterol", "non"),
        ("antecedents_cardio", "non"),
        ("activite_physique", "oui"),
        ("alcool", "aucun"),
        ("symptomes_cardio", "non"),
        ("antecedents_colon", "non"),
        ("symptomes_digestifs", "non"),
        ("sang_selles", "non"),
        ("depistage_colon", "moins_2_ans"),
        ("fibres", "oui"),
        ("viandes_transformees", "non"),
    ])
}

/// Seventy-year-old male smoker with hypertension, sedentary, 90 kg / 180 cm / 105 cm waist.
pub(super) fn smoker_answers() -> RawAnswers {
    baseline_answers()
        .with(QuestionnaireField::PatientName, "Henri Dubois")
        .with(QuestionnaireField::Age, "70")
        .with(QuestionnaireField::Sex, "homme")
        .with(QuestionnaireField::Weight, "90")
        .with(QuestionnaireField::Height, "180")
        .with(QuestionnaireField::Waist, "105")
        .with(QuestionnaireField::Smoking, "oui")
        .with(QuestionnaireField::Hypertension, "oui")
        .with(QuestionnaireField::PhysicalActivity, "non")
}

pub(super) fn profile(answers: &RawAnswers) -> PatientProfile {
    IntakeGuard::default()
        .profile_from_answers(answers)
        .expect("fixture answers are valid")
}

pub(super) fn score_both(profile: &PatientProfile) -> (RiskAssessment, RiskAssessment) {
    let measures = Anthropometrics::from_profile(profile);
    (
        score_cardiovascular(profile, &measures),
        score_colorectal(profile),
    )
}

pub(super) fn fixed_timestamp() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("unambiguous local time")
}
