use crate::render::{render_batch_json, render_report};
use clap::{Args, ValueEnum};
use health_screen::error::AppError;
use health_screen::workflows::import::{InputFormat, QuestionnaireImporter};
use health_screen::workflows::screening::ScreeningService;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for InputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => InputFormat::Csv,
            FormatArg::Json => InputFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Questionnaire file: CSV with a header row of field names, or JSON object(s)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Input format (defaults to the file extension)
    #[arg(long, value_enum)]
    pub(crate) format: Option<FormatArg>,
    /// Print results as JSON instead of text reports
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(service: &ScreeningService, args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        format,
        json,
    } = args;

    let batch = QuestionnaireImporter::from_path(&input, format.map(InputFormat::from))?;
    info!(path = %input.display(), questionnaires = batch.len(), "questionnaires imported");

    let results = service.assess_batch(&batch);
    let rejected = results.iter().filter(|result| result.is_err()).count();

    if json {
        println!("{}", render_batch_json(&results)?);
    } else {
        for (index, result) in results.iter().enumerate() {
            match result {
                Ok(analysis) => println!("{}", render_report(analysis)),
                Err(err) => {
                    warn!(questionnaire = index + 1, %err, "questionnaire rejected");
                    println!("Questionnaire {} rejected: {}\n", index + 1, err);
                }
            }
        }
    }

    if rejected > 0 {
        return Err(AppError::Rejected {
            rejected,
            total: results.len(),
        });
    }
    Ok(())
}
