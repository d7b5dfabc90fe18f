use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("No records yet")]
    NoDataAvailable,
    #[error("Failed to save record: {0}")]
    InsertionFailure(String),
    #[error("Mongo error: {0}")]
    Store(#[from] mongodb::error::Error),
    #[error("Common error: {0}")]
    Eyre(#[from] eyre::Error),
}

impl TrackerError {
    /// Keeps driver failures apart from everything else a store can return.
    pub fn from_store(err: eyre::Error) -> TrackerError {
        match err.downcast::<mongodb::error::Error>() {
            Ok(err) => TrackerError::Store(err),
            Err(err) => TrackerError::Eyre(err),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, TrackerError::NoDataAvailable)
    }

    /// Short description safe to show to the end user.
    pub fn brief(&self) -> String {
        match self {
            TrackerError::Configuration(msg) => format!("configuration error: {}", msg),
            TrackerError::NoDataAvailable => "no records yet".to_string(),
            TrackerError::InsertionFailure(_) => "the record could not be saved".to_string(),
            TrackerError::Store(_) => "the database is unavailable".to_string(),
            TrackerError::Eyre(_) => "unexpected failure".to_string(),
        }
    }
}
