use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

const ABOUT: &str = "Daily forecast to text report";

const LONG_ABOUT: &str = "
Turns a daily forecast document (the `DailyForecasts` JSON format) into a plain text report: an
overview of the lowest and highest temperatures and the average low/high, followed by a block per
day with its temperatures, narrative and chance of rain. Temperatures are reported in Celsius.

The report goes to stdout unless an output file is given.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "Forecast JSON file (e.g. data/forecast_5days_a.json)")]
    pub source: PathBuf,

    #[arg(short, long, help = "Write the report to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[test]
fn test_args() {
    let args = Args::parse_from(["forecast-report", "data/forecast.json"]);
    assert_eq!(args.source, PathBuf::from("data/forecast.json"));
    assert_eq!(args.output, None);

    let args = Args::parse_from(["forecast-report", "-o", "report.txt", "forecast.json"]);
    assert_eq!(args.source, PathBuf::from("forecast.json"));
    assert_eq!(args.output, Some(PathBuf::from("report.txt")));
}
