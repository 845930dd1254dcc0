use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fare_common::config::AppConfig;
use fare_ml::profile::{validate_bmi, CustomerProfile, Smoker};
use fare_ml::service::FareService;
use fare_telemetry::telemetry::{init_telemetry, shutdown_telemetry};
use log::info;

use crate::form::{run_form, FormDefaults, AGE_HELP, BMI_HELP, SMOKER_HELP};
use crate::insights::run_insights;
use crate::predict::run_predict;

#[derive(Parser)]
#[command(
    version,
    name = "fare",
    about = "Estimate annual insurance charges with a linear regression model"
)]
struct Cli {
    /// The model artifact to load, overriding the configured path.
    #[arg(long, global = true, value_name = "PATH")]
    model: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the charge for one customer profile.
    Predict {
        #[arg(long, help = AGE_HELP, value_parser = clap::value_parser!(u32).range(18..=65))]
        age: Option<u32>,
        #[arg(long, help = BMI_HELP, value_parser = parse_bmi)]
        bmi: Option<f64>,
        #[arg(long, help = SMOKER_HELP)]
        smoker: Option<Smoker>,
    },
    /// Show the coefficients, intercept and accuracy of the loaded model.
    Insights,
    /// Fill in a customer profile interactively.
    Form,
}

fn parse_bmi(s: &str) -> Result<f64, String> {
    let bmi = s.parse::<f64>().map_err(|e| e.to_string())?;
    validate_bmi(bmi).map_err(|e| e.to_string())
}

pub fn main(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_from(args);

    let mut config = AppConfig::load()?;
    if let Some(path) = cli.model {
        config.model.path = path;
    }
    let defaults = FormDefaults::try_from_config(&config.form)?;
    let service = FareService::try_from_config(&config)?;

    init_telemetry(&config.telemetry)?;
    info!(
        "Using model artifact {} (declared R\u{b2} {})",
        config.model.path.display(),
        config.model.r2_score
    );

    let mut stdout = io::stdout().lock();
    let result = match cli.command {
        Command::Predict { age, bmi, smoker } => match CustomerProfile::try_new(
            age.unwrap_or(defaults.age),
            bmi.unwrap_or(defaults.bmi),
            smoker.unwrap_or(defaults.smoker),
        ) {
            Ok(profile) => run_predict(&service, &profile, &mut stdout),
            Err(e) => Err(e.into()),
        },
        Command::Insights => run_insights(&service, &mut stdout),
        Command::Form => run_form(&service, &defaults, &mut io::stdin().lock(), &mut stdout),
    };

    shutdown_telemetry();

    result
}
