use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart size: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read data source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv header is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid record at data row {row}, column `{column}`: {reason}")]
    InvalidRecord {
        row: usize,
        column: &'static str,
        reason: String,
    },

    #[error("unknown document node: {0}")]
    UnknownNode(usize),
}
