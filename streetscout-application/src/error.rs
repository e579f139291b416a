use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The file has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("The file is not a valid CSV file: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The error was caused by the input and not by the system.
    pub fn is_bad_input(&self) -> bool {
        match self {
            Self::MissingColumn(_) => true,
            Self::Csv(err) => !matches!(err.kind(), csv::ErrorKind::Io(_)),
            Self::Io(_) | Self::Internal(_) => false,
        }
    }
}
