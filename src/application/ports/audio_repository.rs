use async_trait::async_trait;

use crate::domain::{AudioRecord, AudioUpdate};

use super::RepositoryError;

/// Store contract for audio records, keyed by language. Implemented by the
/// MongoDB-backed primary store and the in-memory fallback store; both must
/// expose identical semantics so the coordinator can swap between them.
///
/// `list` order is unspecified here; sorting is the coordinator's job.
#[async_trait]
pub trait AudioRepository: Send + Sync {
    /// Liveness probe against the backing medium.
    async fn ping(&self) -> Result<(), RepositoryError>;

    async fn list(&self) -> Result<Vec<AudioRecord>, RepositoryError>;

    /// Absence is a normal outcome for reads, so it is `Ok(None)` rather
    /// than an error.
    async fn get(&self, language: &str) -> Result<Option<AudioRecord>, RepositoryError>;

    /// Fails with [`RepositoryError::AlreadyExists`] when a record for the
    /// same language is present.
    async fn create(&self, record: &AudioRecord) -> Result<AudioRecord, RepositoryError>;

    /// Replaces only the mutable fields, leaving `language` and `id`
    /// untouched. Fails with [`RepositoryError::NotFound`] when absent.
    async fn update(
        &self,
        language: &str,
        update: &AudioUpdate,
    ) -> Result<AudioRecord, RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] when absent.
    async fn delete(&self, language: &str) -> Result<(), RepositoryError>;
}
