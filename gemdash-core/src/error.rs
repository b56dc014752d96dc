use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error(
        "series for {period} has mismatched lengths \
         (labels {labels}, purchases {purchases}, sales {sales})"
    )]
    SeriesLengthMismatch {
        period: &'static str,
        labels: usize,
        purchases: usize,
        sales: usize,
    },
}

/// Transport-level failure (connection refused, DNS, aborted fetch).
/// Carries the host error as text; the user only ever sees the generic
/// retry message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("expected JSON response but got {0:?}")]
    MalformedResponse(Option<String>),
}
