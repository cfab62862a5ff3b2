/// Convenience result type used across closer.
pub type CloserResult<T> = Result<T, CloserError>;

/// Top-level error taxonomy used by the choreography APIs.
#[derive(thiserror::Error, Debug)]
pub enum CloserError {
    /// Invalid user-provided values (ranges, thresholds, layout).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed breakpoint tables, rejected at construction.
    #[error("curve error: {0}")]
    Curve(String),

    /// Persistent flag storage failed.
    #[error("store error: {0}")]
    Store(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem or stream IO.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CloserError {
    /// Build a [`CloserError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CloserError::Curve`] value.
    pub fn curve(msg: impl Into<String>) -> Self {
        Self::Curve(msg.into())
    }

    /// Build a [`CloserError::Store`] value.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Build a [`CloserError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CloserError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CloserError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
