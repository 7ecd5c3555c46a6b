use serde::{Deserialize, Serialize};

use super::domain::PatientProfile;

/// Body mass index bins, lower bound inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityClassI,
    ObesityClassII,
    ObesityClassIII,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else if bmi < 35.0 {
            Self::ObesityClassI
        } else if bmi < 40.0 {
            Self::ObesityClassII
        } else {
            Self::ObesityClassIII
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Insuffisance pondérale",
            BmiCategory::Normal => "Corpulence normale",
            BmiCategory::Overweight => "Surpoids",
            BmiCategory::ObesityClassI => "Obésité classe I",
            BmiCategory::ObesityClassII => "Obésité classe II",
            BmiCategory::ObesityClassIII => "Obésité classe III",
        }
    }
}

/// Waist-to-height ratio bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhtrCategory {
    Low,
    Intermediate,
    High,
}

impl WhtrCategory {
    pub fn classify(whtr: f64) -> Self {
        if whtr < 0.5 {
            Self::Low
        } else if whtr < 0.6 {
            Self::Intermediate
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WhtrCategory::Low => "low metabolic risk",
            WhtrCategory::Intermediate => "intermediate metabolic risk",
            WhtrCategory::High => "high metabolic risk",
        }
    }
}

/// Derived body measurements. Values are unrounded; scoring compares against these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anthropometrics {
    pub bmi: f64,
    pub whtr: f64,
}

impl Anthropometrics {
    pub fn from_profile(profile: &PatientProfile) -> Self {
        Self {
            bmi: body_mass_index(profile.weight_kg, profile.height_cm),
            whtr: waist_to_height_ratio(profile.waist_cm, profile.height_cm),
        }
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::classify(self.bmi)
    }

    pub fn whtr_category(&self) -> WhtrCategory {
        WhtrCategory::classify(self.whtr)
    }
}

pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn waist_to_height_ratio(waist_cm: f64, height_cm: f64) -> f64 {
    waist_cm / height_cm
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
