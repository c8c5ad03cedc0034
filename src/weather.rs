use tracing::debug;

use crate::error::ForecastError;
use crate::units::stats::mean;

/// One day of the forecast. Temperatures are in Fahrenheit.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: String,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub day_phrase: String,
    pub day_rain_probability: u32,
    pub night_phrase: String,
    pub night_rain_probability: u32,
}

/// Forecast days in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub daily: Vec<DailyForecast>,
}

/// Statistics over a whole forecast, still in Fahrenheit.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary<'a> {
    pub min_temperature: f64,
    pub min_date: &'a str,
    pub max_temperature: f64,
    pub max_date: &'a str,
    pub mean_min_temperature: f64,
    pub mean_max_temperature: f64,
    pub day_count: usize,
}

impl Forecast {
    pub fn new(daily: Vec<DailyForecast>) -> Self {
        Self { daily }
    }

    pub fn len(&self) -> usize {
        self.daily.len()
    }

    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }

    /// Finds the coldest and warmest days and the mean low/high.
    ///
    /// Extremes only move on a strictly lower/higher value, so ties resolve to
    /// the earliest day.
    pub fn summarize(&self) -> Result<ForecastSummary<'_>, ForecastError> {
        let first = self.daily.first().ok_or(ForecastError::EmptyDataset)?;

        let mut summary = ForecastSummary {
            min_temperature: first.min_temperature,
            min_date: first.date.as_str(),
            max_temperature: first.max_temperature,
            max_date: first.date.as_str(),
            mean_min_temperature: 0.0,
            mean_max_temperature: 0.0,
            day_count: self.daily.len(),
        };
        let mut total_min = 0.0;
        let mut total_max = 0.0;

        for day in &self.daily {
            total_min += day.min_temperature;
            if day.min_temperature < summary.min_temperature {
                summary.min_temperature = day.min_temperature;
                summary.min_date = day.date.as_str();
            }

            total_max += day.max_temperature;
            if day.max_temperature > summary.max_temperature {
                summary.max_temperature = day.max_temperature;
                summary.max_date = day.date.as_str();
            }
        }

        summary.mean_min_temperature = mean(total_min, summary.day_count);
        summary.mean_max_temperature = mean(total_max, summary.day_count);
        debug!(?summary, "summarized forecast");
        Ok(summary)
    }
}
