use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("invalid forecast date {input:?}: {source}")]
    Date {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("malformed forecast data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("forecast contains no days")]
    EmptyDataset,
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
