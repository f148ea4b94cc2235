use std::sync::Arc;

use crate::application::ports::{AudioRepository, RepositoryError};
use crate::domain::{AudioRecord, AudioUpdate};

/// Routes each call to the primary store when one is connected, retrying
/// against the in-memory fallback on infrastructure failures.
///
/// `primary` is `None` when the startup probe failed; that state is fixed for
/// the lifetime of the process. A per-call failure does not disconnect the
/// primary: the next request tries it again. Writes that land in the fallback
/// during an outage are never replayed into the primary once it recovers;
/// at-most-once durability during outages is an accepted limitation.
pub struct AudioService {
    primary: Option<Arc<dyn AudioRepository>>,
    fallback: Arc<dyn AudioRepository>,
}

impl AudioService {
    pub fn new(
        primary: Option<Arc<dyn AudioRepository>>,
        fallback: Arc<dyn AudioRepository>,
    ) -> Self {
        Self { primary, fallback }
    }

    pub fn is_connected(&self) -> bool {
        self.primary.is_some()
    }

    /// Decides which store serves the current call. Returns the primary only
    /// while connected; callers fall back explicitly on per-call errors.
    fn active_primary(&self) -> Option<&Arc<dyn AudioRepository>> {
        self.primary.as_ref()
    }

    /// All records, sorted by language ascending. The ordering holds
    /// identically for primary-backed and fallback-backed responses.
    pub async fn list(&self) -> Result<Vec<AudioRecord>, AudioServiceError> {
        if let Some(primary) = self.active_primary() {
            match primary.list().await {
                Ok(records) => return Ok(sorted_by_language(records)),
                Err(e) if e.is_unavailable() => {
                    tracing::warn!(error = %e, operation = "list", "Primary store failed, serving from fallback");
                }
                Err(e) => return Err(e.into()),
            }
        }
        let records = self.fallback.list().await?;
        Ok(sorted_by_language(records))
    }

    pub async fn get(&self, language: &str) -> Result<AudioRecord, AudioServiceError> {
        if let Some(primary) = self.active_primary() {
            match primary.get(language).await {
                Ok(found) => return found_or_not(found, language),
                Err(e) if e.is_unavailable() => {
                    tracing::warn!(error = %e, operation = "get", "Primary store failed, serving from fallback");
                }
                Err(e) => return Err(e.into()),
            }
        }
        let found = self.fallback.get(language).await?;
        found_or_not(found, language)
    }

    /// Builds the record (id derived from the language key) and inserts it
    /// into whichever store is authoritative for this call.
    pub async fn create(
        &self,
        language: String,
        audio_url: String,
        text_content: String,
    ) -> Result<AudioRecord, AudioServiceError> {
        let record = AudioRecord::new(language, audio_url, text_content);
        if let Some(primary) = self.active_primary() {
            match primary.create(&record).await {
                Ok(stored) => return Ok(stored),
                Err(e) if e.is_unavailable() => {
                    tracing::warn!(error = %e, operation = "create", "Primary store failed, writing to fallback");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(self.fallback.create(&record).await?)
    }

    pub async fn update(
        &self,
        language: &str,
        update: AudioUpdate,
    ) -> Result<AudioRecord, AudioServiceError> {
        if let Some(primary) = self.active_primary() {
            match primary.update(language, &update).await {
                Ok(stored) => return Ok(stored),
                Err(e) if e.is_unavailable() => {
                    tracing::warn!(error = %e, operation = "update", "Primary store failed, writing to fallback");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(self.fallback.update(language, &update).await?)
    }

    pub async fn delete(&self, language: &str) -> Result<(), AudioServiceError> {
        if let Some(primary) = self.active_primary() {
            match primary.delete(language).await {
                Ok(()) => return Ok(()),
                Err(e) if e.is_unavailable() => {
                    tracing::warn!(error = %e, operation = "delete", "Primary store failed, writing to fallback");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(self.fallback.delete(language).await?)
    }

    /// Connectivity as reported by `/health`. A connected primary is pinged
    /// on every call so a database that died after startup shows up as
    /// `error` rather than `connected`.
    pub async fn database_status(&self) -> DatabaseStatus {
        match &self.primary {
            Some(primary) => match primary.ping().await {
                Ok(()) => DatabaseStatus::Connected,
                Err(e) => {
                    tracing::warn!(error = %e, "Primary store ping failed");
                    DatabaseStatus::Error
                }
            },
            None => DatabaseStatus::FallbackMode,
        }
    }
}

fn sorted_by_language(mut records: Vec<AudioRecord>) -> Vec<AudioRecord> {
    records.sort_by(|a, b| a.language.cmp(&b.language));
    records
}

fn found_or_not(
    found: Option<AudioRecord>,
    language: &str,
) -> Result<AudioRecord, AudioServiceError> {
    found.ok_or_else(|| AudioServiceError::NotFound(language.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Connected,
    FallbackMode,
    Error,
}

impl DatabaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::FallbackMode => "fallback_mode",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioServiceError {
    #[error("audio file not found for language: {0}")]
    NotFound(String),
    #[error("audio file for language '{0}' already exists")]
    AlreadyExists(String),
    #[error("store: {0}")]
    Store(RepositoryError),
}

impl From<RepositoryError> for AudioServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(language) => Self::NotFound(language),
            RepositoryError::AlreadyExists(language) => Self::AlreadyExists(language),
            other => Self::Store(other),
        }
    }
}
