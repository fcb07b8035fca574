mod cli;
mod infra;
mod routes;
mod server;

use address_validation::error::AppError;
use std::process::ExitCode;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
