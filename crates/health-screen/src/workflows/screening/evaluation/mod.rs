mod cardiovascular;
mod colorectal;
mod levels;

pub use cardiovascular::score_cardiovascular;
pub use colorectal::score_colorectal;
pub use levels::{LevelBreakpoints, RiskLevel, CARDIOVASCULAR_LEVELS, COLORECTAL_LEVELS};

use serde::{Deserialize, Serialize};

/// Risk domains assessed from a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDomain {
    Cardiovascular,
    Colorectal,
}

impl RiskDomain {
    pub const fn label(self) -> &'static str {
        match self {
            RiskDomain::Cardiovascular => "cardiovascular",
            RiskDomain::Colorectal => "colorectal",
        }
    }

    pub fn breakpoints(self) -> &'static LevelBreakpoints {
        match self {
            RiskDomain::Cardiovascular => &CARDIOVASCULAR_LEVELS,
            RiskDomain::Colorectal => &COLORECTAL_LEVELS,
        }
    }

    /// Domain-specific wording for a level.
    pub const fn level_label(self, level: RiskLevel) -> &'static str {
        match (self, level) {
            (_, RiskLevel::Low) => "Low",
            (RiskDomain::Cardiovascular, RiskLevel::Moderate) => "Moderate",
            (RiskDomain::Colorectal, RiskLevel::Moderate) => "Intermediate",
            (_, RiskLevel::High) => "High",
            (_, RiskLevel::VeryHigh) => "Very high",
        }
    }

    const fn sentinel_label(self) -> &'static str {
        match self {
            RiskDomain::Cardiovascular => "no major risk factor identified in the questionnaire",
            RiskDomain::Colorectal => "no significant risk factor identified",
        }
    }
}

/// Scoring factors, used to tag each contribution in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Age,
    Smoking,
    Hypertension,
    Diabetes,
    Cholesterol,
    CardioFamilyHistory,
    Sedentary,
    Alcohol,
    BodyMassIndex,
    AbdominalObesity,
    WaistToHeight,
    CardioAlarmSymptoms,
    ColonFamilyHistory,
    DigestiveSymptoms,
    BloodInStool,
    ScreeningGap,
    LowFiber,
    ProcessedMeat,
    /// Zero-point entry recorded when no rule fires.
    NoneIdentified,
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    pub points: u16,
    pub label: String,
}

impl ScoreComponent {
    pub fn summary(&self) -> String {
        if self.points == 0 {
            format!("0: {}", self.label)
        } else {
            format!("+{}: {}", self.points, self.label)
        }
    }
}

/// Scored outcome for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub domain: RiskDomain,
    pub score: u16,
    pub level: RiskLevel,
    pub level_label: String,
    pub components: Vec<ScoreComponent>,
    pub alerts: Vec<String>,
}

impl RiskAssessment {
    pub fn is_high_or_above(&self) -> bool {
        self.level >= RiskLevel::High
    }
}

/// Accumulates fired rules for one domain in evaluation order.
pub(crate) struct Scorecard {
    domain: RiskDomain,
    components: Vec<ScoreComponent>,
    alerts: Vec<String>,
}

impl Scorecard {
    pub(crate) fn new(domain: RiskDomain) -> Self {
        Self {
            domain,
            components: Vec::new(),
            alerts: Vec::new(),
        }
    }

    pub(crate) fn award(&mut self, condition: bool, factor: RiskFactor, points: u16, label: &str) {
        if condition {
            self.components.push(ScoreComponent {
                factor,
                points,
                label: label.to_string(),
            });
        }
    }

    pub(crate) fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    pub(crate) fn finish(mut self) -> RiskAssessment {
        if self.components.is_empty() {
            self.components.push(ScoreComponent {
                factor: RiskFactor::NoneIdentified,
                points: 0,
                label: self.domain.sentinel_label().to_string(),
            });
        }

        let score = self.components.iter().map(|component| component.points).sum();
        let level = self.domain.breakpoints().classify(score);

        RiskAssessment {
            domain: self.domain,
            score,
            level,
            level_label: self.domain.level_label(level).to_string(),
            components: self.components,
            alerts: self.alerts,
        }
    }
}
