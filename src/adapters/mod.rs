#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, init_logging, parse_request, print_output};
    use crate::salinity::{SalinitySolver, calculator::compute_summary};

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let request = parse_request(&args)?;
    tracing::debug!(?request, "evaluating request");

    let out = compute_summary(&request, &SalinitySolver::new())?;

    print_output(&out, &args)?;

    Ok(())
}
