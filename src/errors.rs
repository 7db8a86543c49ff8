use thiserror::Error;

/// Failures of the in-memory record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate ID")]
    DuplicateId(String),
}

/// A field of a submitted record broke one of its rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field '{field}' failed validation on the '{rule}' rule")]
pub struct ValidationError {
    pub field: &'static str,
    pub rule: &'static str,
}

/// Everything a route handler can fail with.
///
/// None of these become HTTP error statuses on `/api`: the pipeline renders
/// them into the error fragment instead.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("missing ID")]
    MissingIdentifier,

    #[error("{0}")]
    Failure(String),
}

/// Writing a fragment to the response sink failed.
///
/// Fatal for the request: no further fragments are attempted.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write fragment: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode view state: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
