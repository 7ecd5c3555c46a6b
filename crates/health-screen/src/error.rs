use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::import::QuestionnaireImportError;
use crate::workflows::screening::ScreeningError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Import(QuestionnaireImportError),
    Screening(ScreeningError),
    Output(serde_json::Error),
    /// Some questionnaires in a batch were rejected; the others were still reported.
    Rejected { rejected: usize, total: usize },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Screening(err) => write!(f, "screening error: {}", err),
            AppError::Output(err) => write!(f, "output error: {}", err),
            AppError::Rejected { rejected, total } => {
                write!(f, "{} of {} questionnaire(s) rejected", rejected, total)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Screening(err) => Some(err),
            AppError::Output(err) => Some(err),
            AppError::Rejected { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<QuestionnaireImportError> for AppError {
    fn from(value: QuestionnaireImportError) -> Self {
        Self::Import(value)
    }
}

impl From<ScreeningError> for AppError {
    fn from(value: ScreeningError) -> Self {
        Self::Screening(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
