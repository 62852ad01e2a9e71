//! Error taxonomy for the engine's public APIs.

/// Convenience result type used across Kaleido.
pub type KaleidoResult<T> = Result<T, KaleidoError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The engine has no recoverable runtime failure modes once constructed:
/// everything that can go wrong is a rejected parameter or an unsupported
/// frame shape, reported before any pixel work starts.
#[derive(thiserror::Error, Debug)]
pub enum KaleidoError {
    /// A parameter or frame buffer was rejected by validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested operation is not supported for this frame layout.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KaleidoError {
    /// Build a [`KaleidoError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`KaleidoError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
