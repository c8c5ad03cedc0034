pub mod accuweather;
pub mod cli;
pub mod error;
pub mod format;
pub mod report;
pub mod units;
pub mod weather;

use std::path::Path;

pub use error::ForecastError;
pub use report::render;
pub use weather::{DailyForecast, Forecast, ForecastSummary};

/// Reads a daily forecast file and renders its text report.
pub fn process_weather(path: impl AsRef<Path>) -> Result<String, ForecastError> {
    let doc = accuweather::daily::DailyForecasts::from_file(path.as_ref())?;
    render(&Forecast::from(doc))
}
