mod parser;

use crate::workflows::screening::RawAnswers;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Serialized layouts a questionnaire batch can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Header row of field names, one questionnaire per row.
    Csv,
    /// One object or an array of objects mapping field names to values.
    Json,
}

impl InputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }
}

#[derive(Debug)]
pub enum QuestionnaireImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    DuplicateColumn(String),
    UnsupportedValue { record: usize, key: String },
    UnknownFormat(String),
}

impl std::fmt::Display for QuestionnaireImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionnaireImportError::Io(err) => {
                write!(f, "failed to read questionnaire input: {}", err)
            }
            QuestionnaireImportError::Csv(err) => write!(f, "invalid questionnaire CSV: {}", err),
            QuestionnaireImportError::Json(err) => {
                write!(f, "invalid questionnaire JSON: {}", err)
            }
            QuestionnaireImportError::DuplicateColumn(name) => {
                write!(f, "column `{}` appears more than once", name)
            }
            QuestionnaireImportError::UnsupportedValue { record, key } => write!(
                f,
                "record {}: field `{}` must be a string or a number",
                record, key
            ),
            QuestionnaireImportError::UnknownFormat(path) => write!(
                f,
                "cannot infer questionnaire format for `{}` (expected .csv or .json)",
                path
            ),
        }
    }
}

impl std::error::Error for QuestionnaireImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuestionnaireImportError::Io(err) => Some(err),
            QuestionnaireImportError::Csv(err) => Some(err),
            QuestionnaireImportError::Json(err) => Some(err),
            QuestionnaireImportError::DuplicateColumn(_)
            | QuestionnaireImportError::UnsupportedValue { .. }
            | QuestionnaireImportError::UnknownFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for QuestionnaireImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for QuestionnaireImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for QuestionnaireImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads questionnaire batches from exported files.
pub struct QuestionnaireImporter;

impl QuestionnaireImporter {
    /// Read a file, inferring the format from its extension when none is given.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        format: Option<InputFormat>,
    ) -> Result<Vec<RawAnswers>, QuestionnaireImportError> {
        let path = path.as_ref();
        let format = match format.or_else(|| InputFormat::from_path(path)) {
            Some(format) => format,
            None => {
                return Err(QuestionnaireImportError::UnknownFormat(
                    path.display().to_string(),
                ))
            }
        };
        let file = File::open(path)?;
        Self::from_reader(file, format)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: InputFormat,
    ) -> Result<Vec<RawAnswers>, QuestionnaireImportError> {
        match format {
            InputFormat::Csv => parser::parse_csv(reader),
            InputFormat::Json => parser::parse_json(reader),
        }
    }
}
