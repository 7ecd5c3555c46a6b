use crate::workflows::screening::CategoricalPolicy;
use std::env;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let policy_raw =
            env::var("SCREENING_CATEGORICAL_POLICY").unwrap_or_else(|_| "strict".to_string());
        let categorical_policy = CategoricalPolicy::parse(&policy_raw)
            .ok_or(ConfigError::InvalidCategoricalPolicy(policy_raw))?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            screening: ScreeningConfig { categorical_policy },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling questionnaire validation.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub categorical_policy: CategoricalPolicy,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SCREENING_CATEGORICAL_POLICY must be `strict` or `lenient` (found `{0}`)")]
    InvalidCategoricalPolicy(String),
}
