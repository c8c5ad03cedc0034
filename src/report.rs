use crate::error::ForecastError;
use crate::format::{format_date, format_temperature};
use crate::units::temperature::fahrenheit_to_celsius;
use crate::weather::{DailyForecast, Forecast, ForecastSummary};

const INDENT: &str = "    ";

fn celsius(temp_f: f64) -> String {
    format_temperature(fahrenheit_to_celsius(temp_f))
}

fn display_overview(summary: &ForecastSummary) -> Result<Vec<String>, ForecastError> {
    let min_date = format_date(summary.min_date)?;
    let max_date = format_date(summary.max_date)?;

    Ok(vec![
        format!("{} Day Overview", summary.day_count),
        format!(
            "{INDENT}The lowest temperature will be {}, and will occur on {min_date}.",
            celsius(summary.min_temperature)
        ),
        format!(
            "{INDENT}The highest temperature will be {}, and will occur on {max_date}.",
            celsius(summary.max_temperature)
        ),
        format!(
            "{INDENT}The average low this week is {}.",
            celsius(summary.mean_min_temperature)
        ),
        format!(
            "{INDENT}The average high this week is {}.",
            celsius(summary.mean_max_temperature)
        ),
    ])
}

fn display_day(day: &DailyForecast) -> Result<Vec<String>, ForecastError> {
    let date = format_date(&day.date)?;

    Ok(vec![
        String::new(),
        format!("-------- {date} --------"),
        format!("Minimum Temperature: {}", celsius(day.min_temperature)),
        format!("Maximum Temperature: {}", celsius(day.max_temperature)),
        format!("Daytime: {}", day.day_phrase),
        format!("{INDENT}Chance of rain:  {}%", day.day_rain_probability),
        format!("Nighttime: {}", day.night_phrase),
        format!("{INDENT}Chance of rain:  {}%", day.night_rain_probability),
    ])
}

/// Renders the overview paragraph followed by one block per day, closed by a
/// blank line.
///
/// Nothing is returned unless every date in the forecast parses.
pub fn render(forecast: &Forecast) -> Result<String, ForecastError> {
    let summary = forecast.summarize()?;

    let mut lines = display_overview(&summary)?;
    for day in &forecast.daily {
        lines.extend(display_day(day)?);
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    Ok(out)
}
