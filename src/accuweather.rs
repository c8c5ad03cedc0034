use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ForecastError;
use crate::weather::{self, Forecast};

pub mod daily {
    use super::*;

    /// Daily forecast document as published upstream. Every field below is
    /// required; anything else in the document is ignored.
    #[derive(Deserialize, Debug)]
    pub struct DailyForecasts {
        #[serde(rename = "DailyForecasts")]
        pub daily_forecasts: Vec<Day>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Day {
        #[serde(rename = "Date")]
        pub date: String,

        #[serde(rename = "Temperature")]
        pub temperature: Temperature,

        #[serde(rename = "Day")]
        pub day: Period,

        #[serde(rename = "Night")]
        pub night: Period,
    }

    #[derive(Deserialize, Debug)]
    pub struct Temperature {
        #[serde(rename = "Minimum")]
        pub minimum: Value,

        #[serde(rename = "Maximum")]
        pub maximum: Value,
    }

    #[derive(Deserialize, Debug)]
    pub struct Value {
        #[serde(rename = "Value")]
        pub value: f64,
    }

    #[derive(Deserialize, Debug)]
    pub struct Period {
        #[serde(rename = "LongPhrase")]
        pub long_phrase: String,

        #[serde(rename = "RainProbability")]
        pub rain_probability: u32,
    }

    impl DailyForecasts {
        pub fn from_json(json: &str) -> Result<Self, ForecastError> {
            Ok(serde_json::from_str(json)?)
        }

        pub fn from_file(path: &Path) -> Result<Self, ForecastError> {
            let json = fs::read_to_string(path).map_err(|source| ForecastError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_json(&json)
        }
    }

    impl From<Day> for weather::DailyForecast {
        fn from(day: Day) -> Self {
            Self {
                date: day.date,
                min_temperature: day.temperature.minimum.value,
                max_temperature: day.temperature.maximum.value,
                day_phrase: day.day.long_phrase,
                day_rain_probability: day.day.rain_probability,
                night_phrase: day.night.long_phrase,
                night_rain_probability: day.night.rain_probability,
            }
        }
    }

    impl From<DailyForecasts> for Forecast {
        fn from(doc: DailyForecasts) -> Self {
            Forecast::new(doc.daily_forecasts.into_iter().map(Into::into).collect())
        }
    }
}

/// Loads a forecast from a local JSON file.
pub fn load(path: &Path) -> Result<Forecast, ForecastError> {
    let forecast = Forecast::from(daily::DailyForecasts::from_file(path)?);
    info!(path = %path.display(), days = forecast.len(), "loaded forecast");
    Ok(forecast)
}

#[cfg(test)]
mod tests {
    use super::daily::DailyForecasts;
    use super::*;

    const ONE_DAY: &str = r#"{
        "Headline": {"Text": "Pleasant"},
        "DailyForecasts": [{
            "Date": "2023-06-05T07:00:00+01:00",
            "Temperature": {
                "Minimum": {"Value": 50, "Unit": "F"},
                "Maximum": {"Value": 68.5, "Unit": "F"}
            },
            "Day": {"LongPhrase": "Sunny", "RainProbability": 0},
            "Night": {"LongPhrase": "Clear", "RainProbability": 5}
        }]
    }"#;

    #[test]
    fn test_decode() {
        let forecast = Forecast::from(DailyForecasts::from_json(ONE_DAY).unwrap());
        assert_eq!(
            forecast.daily,
            vec![weather::DailyForecast {
                date: "2023-06-05T07:00:00+01:00".to_string(),
                min_temperature: 50.0,
                max_temperature: 68.5,
                day_phrase: "Sunny".to_string(),
                day_rain_probability: 0,
                night_phrase: "Clear".to_string(),
                night_rain_probability: 5,
            }]
        );
    }

    #[test]
    fn test_missing_field() {
        let json = ONE_DAY.replace(r#""Minimum": {"Value": 50, "Unit": "F"},"#, "");
        let err = DailyForecasts::from_json(&json).unwrap_err();
        assert!(matches!(err, ForecastError::Decode(_)));
        assert!(err.to_string().contains("Minimum"));
    }

    #[test]
    fn test_mistyped_field() {
        let json = ONE_DAY.replace(r#""RainProbability": 0"#, r#""RainProbability": "none""#);
        assert!(matches!(
            DailyForecasts::from_json(&json),
            Err(ForecastError::Decode(_))
        ));
    }

    #[test]
    fn test_load_only_reads_local_files() {
        let source = Path::new("https://example.com/forecast.json");
        match load(source) {
            Err(ForecastError::Io { path, .. }) => assert_eq!(path.as_path(), source),
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
