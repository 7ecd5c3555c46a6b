use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Questionnaire field keys, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuestionnaireField {
    PatientName,
    Age,
    Sex,
    Weight,
    Height,
    Waist,
    Smoking,
    Hypertension,
    Diabetes,
    Cholesterol,
    CardioFamilyHistory,
    PhysicalActivity,
    Alcohol,
    CardioAlarmSymptoms,
    ColonFamilyHistory,
    DigestiveSymptoms,
    BloodInStool,
    ColonScreening,
    Fiber,
    ProcessedMeat,
}

impl QuestionnaireField {
    pub const ALL: [QuestionnaireField; 20] = [
        QuestionnaireField::PatientName,
        QuestionnaireField::Age,
        QuestionnaireField::Sex,
        QuestionnaireField::Weight,
        QuestionnaireField::Height,
        QuestionnaireField::Waist,
        QuestionnaireField::Smoking,
        QuestionnaireField::Hypertension,
        QuestionnaireField::Diabetes,
        QuestionnaireField::Cholesterol,
        QuestionnaireField::CardioFamilyHistory,
        QuestionnaireField::PhysicalActivity,
        QuestionnaireField::Alcohol,
        QuestionnaireField::CardioAlarmSymptoms,
        QuestionnaireField::ColonFamilyHistory,
        QuestionnaireField::DigestiveSymptoms,
        QuestionnaireField::BloodInStool,
        QuestionnaireField::ColonScreening,
        QuestionnaireField::Fiber,
        QuestionnaireField::ProcessedMeat,
    ];

    /// Form key used on the wire.
    pub const fn key(self) -> &'static str {
        match self {
            QuestionnaireField::PatientName => "nom_patient",
            QuestionnaireField::Age => "age",
            QuestionnaireField::Sex => "sexe",
            QuestionnaireField::Weight => "poids",
            QuestionnaireField::Height => "taille",
            QuestionnaireField::Waist => "tour_taille",
            QuestionnaireField::Smoking => "tabac",
            QuestionnaireField::Hypertension => "hypertension",
            QuestionnaireField::Diabetes => "diabete",
            QuestionnaireField::Cholesterol => "cholesterol",
            QuestionnaireField::CardioFamilyHistory => "antecedents_cardio",
            QuestionnaireField::PhysicalActivity => "activite_physique",
            QuestionnaireField::Alcohol => "alcool",
            QuestionnaireField::CardioAlarmSymptoms => "symptomes_cardio",
            QuestionnaireField::ColonFamilyHistory => "antecedents_colon",
            QuestionnaireField::DigestiveSymptoms => "symptomes_digestifs",
            QuestionnaireField::BloodInStool => "sang_selles",
            QuestionnaireField::ColonScreening => "depistage_colon",
            QuestionnaireField::Fiber => "fibres",
            QuestionnaireField::ProcessedMeat => "viandes_transformees",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Every field except the patient name must be answered.
    pub const fn is_required(self) -> bool {
        !matches!(self, QuestionnaireField::PatientName)
    }

    /// Tokens accepted for the field, for help output. Empty for free-form fields.
    pub const fn accepted_tokens(self) -> &'static [&'static str] {
        match self {
            QuestionnaireField::PatientName
            | QuestionnaireField::Age
            | QuestionnaireField::Weight
            | QuestionnaireField::Height
            | QuestionnaireField::Waist => &[],
            QuestionnaireField::Sex => &["homme", "femme", "male", "female"],
            QuestionnaireField::Alcohol => &[
                "aucun",
                "modere",
                "excessif",
                "none",
                "moderate",
                "excessive",
            ],
            QuestionnaireField::ColonScreening => &[
                "jamais",
                "plus_2_ans",
                "moins_2_ans",
                "never",
                "over_two_years",
                "recent",
            ],
            _ => &["oui", "non", "yes", "no"],
        }
    }
}

impl fmt::Display for QuestionnaireField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw questionnaire answers as submitted, keyed by field. Missing keys read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnswers {
    values: BTreeMap<QuestionnaireField, String>,
}

impl RawAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect answers from `(key, value)` pairs, keeping only recognized keys and trimming
    /// every value. A later pair for the same key replaces an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut answers = Self::new();
        for (key, value) in pairs {
            if let Some(field) = QuestionnaireField::from_key(key.as_ref()) {
                answers.set(field, value.as_ref());
            }
        }
        answers
    }

    pub fn set(&mut self, field: QuestionnaireField, value: impl AsRef<str>) {
        self.values.insert(field, value.as_ref().trim().to_string());
    }

    pub fn with(mut self, field: QuestionnaireField, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: QuestionnaireField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "homme" | "male" => Some(Self::Male),
            "femme" | "female" => Some(Self::Female),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholUse {
    None,
    Moderate,
    Excessive,
}

impl AlcoholUse {
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "aucun" | "none" | "non" | "no" => Some(Self::None),
            "modere" | "moderate" => Some(Self::Moderate),
            "excessif" | "excessive" => Some(Self::Excessive),
            _ => None,
        }
    }
}

/// Time since the last colorectal screening test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningRecency {
    Never,
    OverTwoYears,
    Recent,
}

impl ScreeningRecency {
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "jamais" | "never" => Some(Self::Never),
            "plus_2_ans" | "over_two_years" => Some(Self::OverTwoYears),
            "moins_2_ans" | "recent" => Some(Self::Recent),
            _ => None,
        }
    }
}

pub(crate) fn yes_no_token(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "oui" | "yes" => Some(true),
        "non" | "no" => Some(false),
        _ => None,
    }
}

/// Typed, validated view of a questionnaire. Risk flags are phrased so that `true` means
/// the risk factor is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub waist_cm: f64,
    pub smoker: bool,
    pub hypertension: bool,
    pub diabetes: bool,
    pub high_cholesterol: bool,
    pub cardio_family_history: bool,
    pub sedentary: bool,
    pub alcohol: AlcoholUse,
    pub cardio_alarm_symptoms: bool,
    pub colon_family_history: bool,
    pub digestive_symptoms: bool,
    pub blood_in_stool: bool,
    pub colon_screening: ScreeningRecency,
    pub low_fiber_diet: bool,
    pub processed_meat: bool,
}

impl PatientProfile {
    pub fn has_metabolic_condition(&self) -> bool {
        self.hypertension || self.diabetes || self.high_cholesterol
    }
}
