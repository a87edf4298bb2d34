use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayStationError>;

#[derive(Error, Debug)]
pub enum PayStationError {
    #[error("Invalid coin: {0}")]
    InvalidCoin(i64),
    #[error("Command error: {0}")]
    CommandError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
