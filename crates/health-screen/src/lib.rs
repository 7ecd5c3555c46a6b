//! Cardiovascular and colorectal risk screening from patient questionnaires.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
