use crate::infra::load_cities;
use crate::server;
use address_validation::config::DEFAULT_CITIES_PATH;
use address_validation::error::AppError;
use address_validation::validation::{validate_address, Address};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status of `validate` when the address is rejected.
const INVALID_ADDRESS_EXIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "Address Validation Service",
    about = "Validate German postal addresses over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a single address and print the verdict as JSON
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured reference city list
    #[arg(long)]
    pub(crate) cities: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    #[arg(long)]
    street_name: Option<String>,
    #[arg(long)]
    street_number: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    city: Option<String>,
    /// Reference city list, one name per line
    #[arg(long, default_value = DEFAULT_CITIES_PATH)]
    cities: PathBuf,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_validate(args: ValidateArgs) -> Result<ExitCode, AppError> {
    let ValidateArgs {
        street_name,
        street_number,
        postal_code,
        city,
        cities,
    } = args;

    let cities = load_cities(&cities)?;
    let address = Address {
        street_name,
        street_number,
        postal_code,
        city,
    };

    let result = validate_address(Some(&address), &cities);
    println!("{}", serde_json::json!(result));

    if result.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(INVALID_ADDRESS_EXIT))
    }
}
