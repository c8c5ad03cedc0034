use std::{error::Error, fs};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use forecast_report::{accuweather, cli::Args, render, ForecastError};

fn main() -> Result<(), Box<dyn Error>> {
    // logs go to stderr, stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,forecast_report=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let forecast = accuweather::load(&args.source)?;
    let report = render(&forecast)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &report).map_err(|source| ForecastError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}
