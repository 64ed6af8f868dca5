use thiserror::Error;

/// Errors raised by the network engine and its loaders.
///
/// Every variant is local and synchronous: the call that detects it fails and
/// leaves the network untouched.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Rejected at construction, e.g. a zero layer size or a negative learning rate.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A sample or target vector disagrees with the configured layer size.
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `train_step` was called before any successful `forward`.
    #[error("train_step called before any forward pass")]
    NotPropagated,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::DimensionMismatch { what, expected, actual })
    }
}
