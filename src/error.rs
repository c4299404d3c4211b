//! Error type returned when a dataset cannot be ranked.

/// Errors raised by this crate.
///
/// Ranking itself cannot fail once a `Ranker` exists, so the only
/// failure mode is a dataset rejected at construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input matrix has fewer than two rows or two columns, has rows
    /// of different lengths, or holds a non-finite value.
    #[error("invalid dataset: {reason}")]
    InvalidDataset { reason: String },
}

impl Error {
    pub(crate) fn invalid_dataset<S: Into<String>>(reason: S) -> Error {
        Error::InvalidDataset { reason: reason.into() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
