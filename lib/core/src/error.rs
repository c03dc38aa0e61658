use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed player data: {0}")]
    DataFormat(String),

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures a caller can recover from (bad query input),
    /// as opposed to initialization or internal faults.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::PlayerNotFound(_))
    }
}
