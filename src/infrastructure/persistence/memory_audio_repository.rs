use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{AudioRepository, RepositoryError};
use crate::domain::{AudioRecord, AudioUpdate};

/// Fallback store: a process-local map keyed by language. Contents are lost
/// on restart, and writes taken here during a primary outage are never
/// replayed into the primary.
///
/// The lock is held only across synchronous map operations, never across an
/// await point.
#[derive(Default)]
pub struct MemoryAudioRepository {
    records: RwLock<HashMap<String, AudioRecord>>,
}

impl MemoryAudioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = AudioRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.language.clone(), record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl AudioRepository for MemoryAudioRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<AudioRecord>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::QueryFailed("audio map lock poisoned".to_string()))?;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, language: &str) -> Result<Option<AudioRecord>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::QueryFailed("audio map lock poisoned".to_string()))?;
        Ok(records.get(language).cloned())
    }

    async fn create(&self, record: &AudioRecord) -> Result<AudioRecord, RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::QueryFailed("audio map lock poisoned".to_string()))?;
        match records.entry(record.language.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::AlreadyExists(record.language.clone())),
            Entry::Vacant(slot) => Ok(slot.insert(record.clone()).clone()),
        }
    }

    async fn update(
        &self,
        language: &str,
        update: &AudioUpdate,
    ) -> Result<AudioRecord, RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::QueryFailed("audio map lock poisoned".to_string()))?;
        match records.get_mut(language) {
            Some(record) => {
                record.apply(update);
                Ok(record.clone())
            }
            None => Err(RepositoryError::NotFound(language.to_string())),
        }
    }

    async fn delete(&self, language: &str) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::QueryFailed("audio map lock poisoned".to_string()))?;
        match records.remove(language) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(language.to_string())),
        }
    }
}
