/// Convenience result type used across Vitrine.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading or validating the project catalog.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Invalid timer parameters or scheduler misuse.
    #[error("scheduling error: {0}")]
    Scheduling(String),

    /// State mutation attempted after a section was torn down.
    ///
    /// This is a programming error in the host wiring, surfaced loudly rather
    /// than swallowed.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitrineError {
    /// Build a [`VitrineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VitrineError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`VitrineError::Scheduling`] value.
    pub fn scheduling(msg: impl Into<String>) -> Self {
        Self::Scheduling(msg.into())
    }

    /// Build a [`VitrineError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`VitrineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
