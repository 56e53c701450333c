/// Result alias used across the crate.
pub type ChromaResult<T> = Result<T, ChromaError>;

/// Error type for the host boundary: configuration, surfaces and sinks.
///
/// Scene generation and animation never fail; they coerce or clamp instead.
#[derive(thiserror::Error, Debug)]
pub enum ChromaError {
    /// Invalid configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Frame sink or encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromaError {
    /// Build a [`ChromaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChromaError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChromaError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ChromaError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
