use serde::{Deserialize, Serialize};

/// Four-step ordinal scale shared by every domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    /// Reported as "Intermediate" for the colorectal domain.
    Moderate,
    High,
    VeryHigh,
}

/// Ordered `(inclusive upper bound, level)` pairs with a final catch-all level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelBreakpoints {
    bounds: [(u16, RiskLevel); 3],
    otherwise: RiskLevel,
}

pub const CARDIOVASCULAR_LEVELS: LevelBreakpoints = LevelBreakpoints {
    bounds: [
        (4, RiskLevel::Low),
        (8, RiskLevel::Moderate),
        (13, RiskLevel::High),
    ],
    otherwise: RiskLevel::VeryHigh,
};

pub const COLORECTAL_LEVELS: LevelBreakpoints = LevelBreakpoints {
    bounds: [
        (3, RiskLevel::Low),
        (7, RiskLevel::Moderate),
        (11, RiskLevel::High),
    ],
    otherwise: RiskLevel::VeryHigh,
};

impl LevelBreakpoints {
    pub fn classify(&self, score: u16) -> RiskLevel {
        self.bounds
            .iter()
            .find(|(upper, _)| score <= *upper)
            .map(|(_, level)| *level)
            .unwrap_or(self.otherwise)
    }
}
