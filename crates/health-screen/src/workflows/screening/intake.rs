use serde::{Deserialize, Serialize};
use tracing::warn;

use super::anthropometry::{body_mass_index, round_to, waist_to_height_ratio};
use super::domain::{
    yes_no_token, AlcoholUse, PatientProfile, QuestionnaireField, RawAnswers, ScreeningRecency,
    Sex,
};

/// Validation errors raised before any scoring takes place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field `{0}` is missing")]
    MissingField(QuestionnaireField),
    #[error("field `{field}` has an invalid value: {value:?}")]
    InvalidValue {
        field: QuestionnaireField,
        value: String,
    },
}

/// How categorical answers outside the recognized vocabulary are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalPolicy {
    /// Reject unrecognized tokens.
    #[default]
    Strict,
    /// Accept unrecognized tokens as the answer that triggers no rule.
    Lenient,
}

impl CategoricalPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CategoricalPolicy::Strict => "strict",
            CategoricalPolicy::Lenient => "lenient",
        }
    }
}

/// Guard responsible for producing `PatientProfile` instances from raw answers.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: CategoricalPolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: CategoricalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CategoricalPolicy {
        self.policy
    }

    /// Validate raw answers and convert them into a typed profile.
    pub fn profile_from_answers(
        &self,
        answers: &RawAnswers,
    ) -> Result<PatientProfile, ValidationError> {
        if let Some(missing) = QuestionnaireField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .find(|field| answers.get(*field).is_empty())
        {
            return Err(ValidationError::MissingField(missing));
        }

        let age = parse_age(answers)?;
        let weight_kg = parse_measurement(answers, QuestionnaireField::Weight)?;
        let height_cm = parse_measurement(answers, QuestionnaireField::Height)?;
        let waist_cm = parse_measurement(answers, QuestionnaireField::Waist)?;
        if !round_to(body_mass_index(weight_kg, height_cm), 1).is_finite() {
            return Err(invalid(
                QuestionnaireField::Weight,
                answers.get(QuestionnaireField::Weight),
            ));
        }
        if !round_to(waist_to_height_ratio(waist_cm, height_cm), 2).is_finite() {
            return Err(invalid(
                QuestionnaireField::Waist,
                answers.get(QuestionnaireField::Waist),
            ));
        }

        let sex_raw = answers.get(QuestionnaireField::Sex);
        let sex = Sex::from_token(sex_raw).ok_or_else(|| invalid(QuestionnaireField::Sex, sex_raw))?;

        // Questions phrased positively ("physically active", "fibre-rich diet") fall back to
        // `true` under the lenient policy, everything else to `false`.
        let active = self.answer(answers, QuestionnaireField::PhysicalActivity, true)?;
        let fiber_rich = self.answer(answers, QuestionnaireField::Fiber, true)?;

        Ok(PatientProfile {
            name: answers.get(QuestionnaireField::PatientName).to_string(),
            age,
            sex,
            weight_kg,
            height_cm,
            waist_cm,
            smoker: self.answer(answers, QuestionnaireField::Smoking, false)?,
            hypertension: self.answer(answers, QuestionnaireField::Hypertension, false)?,
            diabetes: self.answer(answers, QuestionnaireField::Diabetes, false)?,
            high_cholesterol: self.answer(answers, QuestionnaireField::Cholesterol, false)?,
            cardio_family_history: self.answer(
                answers,
                QuestionnaireField::CardioFamilyHistory,
                false,
            )?,
            sedentary: !active,
            alcohol: self.categorical(
                answers,
                QuestionnaireField::Alcohol,
                AlcoholUse::from_token,
                AlcoholUse::None,
            )?,
            cardio_alarm_symptoms: self.answer(
                answers,
                QuestionnaireField::CardioAlarmSymptoms,
                false,
            )?,
            colon_family_history: self.answer(
                answers,
                QuestionnaireField::ColonFamilyHistory,
                false,
            )?,
            digestive_symptoms: self.answer(answers, QuestionnaireField::DigestiveSymptoms, false)?,
            blood_in_stool: self.answer(answers, QuestionnaireField::BloodInStool, false)?,
            colon_screening: self.categorical(
                answers,
                QuestionnaireField::ColonScreening,
                ScreeningRecency::from_token,
                ScreeningRecency::Recent,
            )?,
            low_fiber_diet: !fiber_rich,
            processed_meat: self.answer(answers, QuestionnaireField::ProcessedMeat, false)?,
        })
    }

    fn answer(
        &self,
        answers: &RawAnswers,
        field: QuestionnaireField,
        neutral: bool,
    ) -> Result<bool, ValidationError> {
        self.categorical(answers, field, yes_no_token, neutral)
    }

    fn categorical<T>(
        &self,
        answers: &RawAnswers,
        field: QuestionnaireField,
        parse: fn(&str) -> Option<T>,
        neutral: T,
    ) -> Result<T, ValidationError> {
        let raw = answers.get(field);
        match (parse(raw), self.policy) {
            (Some(value), _) => Ok(value),
            (None, CategoricalPolicy::Strict) => Err(invalid(field, raw)),
            (None, CategoricalPolicy::Lenient) => {
                warn!(%field, value = raw, "unrecognized answer accepted as neutral");
                Ok(neutral)
            }
        }
    }
}

fn invalid(field: QuestionnaireField, raw: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field,
        value: raw.to_string(),
    }
}

fn parse_age(answers: &RawAnswers) -> Result<u32, ValidationError> {
    let raw = answers.get(QuestionnaireField::Age);
    match raw.parse::<i64>() {
        Ok(age) if age > 0 => u32::try_from(age).map_err(|_| invalid(QuestionnaireField::Age, raw)),
        _ => Err(invalid(QuestionnaireField::Age, raw)),
    }
}

fn parse_measurement(
    answers: &RawAnswers,
    field: QuestionnaireField,
) -> Result<f64, ValidationError> {
    let raw = answers.get(field);
    match raw.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(invalid(field, raw)),
    }
}
