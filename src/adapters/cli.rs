use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::AppError;
use crate::models::{Request, WaterSample};
use crate::salinity::calculator::CalculationSummary;

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater density (EOS-80), salinity inversion and conductivity conversion", long_about = None)]
pub struct Args {
    #[arg(long, global = true)]
    json: bool,
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        global = true,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON request document; '-' reads from stdin (ignored when a subcommand is given)"
    )]
    input: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Density (kg/m^3) from salinity, temperature and pressure
    Density {
        #[arg(long, allow_negative_numbers = true)]
        salinity: f64,
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        #[arg(long, default_value_t = 0.0, help = "Pressure in dbar")]
        pressure: f64,
    },
    /// Salinity (PSU) from surface density and temperature
    Salinity {
        #[arg(long)]
        density: f64,
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
    },
    /// Conductivity (uS/cm) from dissolved solids (ppm)
    Conductivity {
        #[arg(long)]
        ppm: f64,
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
    },
    /// Dissolved solids (ppm) from conductivity (uS/cm)
    Concentration {
        #[arg(long = "us-cm")]
        us_cm: f64,
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
    },
}

impl From<&Command> for Request {
    fn from(cmd: &Command) -> Self {
        match *cmd {
            Command::Density {
                salinity,
                temperature,
                pressure,
            } => Request::Density(WaterSample::new(salinity, temperature, pressure)),
            Command::Salinity {
                density,
                temperature,
            } => Request::Salinity {
                density,
                temperature,
                settings: None,
            },
            Command::Conductivity { ppm, temperature } => {
                Request::Conductivity { ppm, temperature }
            }
            Command::Concentration { us_cm, temperature } => {
                Request::Concentration { us_cm, temperature }
            }
        }
    }
}

pub fn init_logging(log_level: &str) -> Result<(), AppError> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn parse_request_doc(doc: &str) -> Result<Request, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseInputJson { source })
}

pub fn parse_request(args: &Args) -> Result<Request, AppError> {
    match (&args.command, &args.input) {
        (Some(cmd), _) => Ok(cmd.into()),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_request_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_request_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

pub fn print_output(out: &CalculationSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    match out {
        CalculationSummary::Density {
            density_kg_per_m3, ..
        } => println!("Density: {:.2} kg/m^3", density_kg_per_m3),
        CalculationSummary::Salinity {
            salinity_psu,
            iterations,
            ..
        } => println!("Salinity: {:.4} PSU ({} iterations)", salinity_psu, iterations),
        CalculationSummary::Conductivity { us_per_cm, .. } => {
            println!("Conductivity: {:.2} uS/cm", us_per_cm)
        }
        CalculationSummary::Concentration { ppm, .. } => println!("Concentration: {:.2} ppm", ppm),
    }

    Ok(())
}
