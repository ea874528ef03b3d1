#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled,

    #[error("performer not found: {0}")]
    PerformerNotFound(i64),

    #[error("tag not found: {0}")]
    TagNotFound(i64),

    #[error("studio not found: {0}")]
    StudioNotFound(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
