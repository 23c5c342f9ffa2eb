use thiserror::Error;

/// Failures of an order source.
///
/// A miss is not an error: lookups return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderLookupError {
    /// The backend could not be reached or answered garbage.
    #[error("order backend unavailable: {0}")]
    Transport(String),

    /// The order table itself is unusable.
    #[error("invalid order dataset: {0}")]
    Dataset(String),
}
