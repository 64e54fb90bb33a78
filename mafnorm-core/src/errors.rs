use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Malformed variant record: {0}")]
    MalformedRecord(String),

    #[error("Can't parse coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("No variants retained from non-empty file: {0}")]
    NoVariantsRetained(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
