#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
}

impl RepositoryError {
    /// Infrastructure failures are candidates for a fallback retry. Domain
    /// outcomes (`NotFound`, `AlreadyExists`) are not: they describe the
    /// store's content, not its availability.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::QueryFailed(_))
    }
}
