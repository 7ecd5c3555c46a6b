mod assess;
mod cli;
mod demo;
mod render;

use health_screen::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
