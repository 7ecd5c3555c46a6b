use crate::assess::{run_assess, AssessArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::render::render_field_reference;
use clap::{Parser, Subcommand};
use health_screen::config::AppConfig;
use health_screen::error::AppError;
use health_screen::telemetry;
use health_screen::workflows::screening::{CategoricalPolicy, ScreeningService};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "health-screen",
    about = "Assess cardiovascular and colorectal risk from patient questionnaires",
    version
)]
struct Cli {
    /// Accept unrecognized categorical answers as neutral instead of rejecting them
    #[arg(long, global = true)]
    lenient: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess questionnaires loaded from a CSV or JSON file
    Assess(AssessArgs),
    /// Assess the two reference questionnaires and print the results
    Demo(DemoArgs),
    /// List questionnaire field names and the answers they accept
    Fields,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if cli.lenient {
        config.screening.categorical_policy = CategoricalPolicy::Lenient;
    }

    telemetry::init(&config.telemetry)?;
    debug!(
        ?config.environment,
        policy = config.screening.categorical_policy.label(),
        "screening configured"
    );

    let service = ScreeningService::new(config.screening.categorical_policy);

    match cli.command {
        Command::Assess(args) => run_assess(&service, args),
        Command::Demo(args) => run_demo(&service, args),
        Command::Fields => {
            print!("{}", render_field_reference());
            Ok(())
        }
    }
}
