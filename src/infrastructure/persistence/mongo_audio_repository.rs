use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};
use tracing::{info, instrument};

use crate::application::ports::{AudioRepository, RepositoryError};
use crate::domain::{AudioRecord, AudioUpdate};

pub const COLLECTION_NAME: &str = "audio_files";

/// Primary store adapter. One document per language in the `audio_files`
/// collection; uniqueness is enforced by an index on `language` in addition
/// to the pre-insert existence check.
pub struct MongoAudioRepository {
    collection: Collection<AudioRecord>,
    database: Database,
}

impl MongoAudioRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<AudioRecord>(COLLECTION_NAME),
            database: database.clone(),
        }
    }

    pub async fn ensure_language_index(&self) -> Result<(), RepositoryError> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "language": 1 })
            .options(options)
            .build();

        self.collection
            .create_index(model, None)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Bulk-inserts `records` when the collection holds nothing yet. Returns
    /// whether seeding happened.
    pub async fn seed_if_empty(&self, records: &[AudioRecord]) -> Result<bool, RepositoryError> {
        let count = self
            .collection
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if count > 0 {
            return Ok(false);
        }

        self.collection
            .insert_many(records, None)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        info!(count = records.len(), "Seeded audio collection");
        Ok(true)
    }
}

#[async_trait]
impl AudioRepository for MongoAudioRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<AudioRecord>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! {}, None)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn get(&self, language: &str) -> Result<Option<AudioRecord>, RepositoryError> {
        self.collection
            .find_one(doc! { "language": language }, None)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    #[instrument(skip(self, record), fields(language = %record.language))]
    async fn create(&self, record: &AudioRecord) -> Result<AudioRecord, RepositoryError> {
        let existing = self
            .collection
            .find_one(doc! { "language": &record.language }, None)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if existing.is_some() {
            return Err(RepositoryError::AlreadyExists(record.language.clone()));
        }

        self.collection.insert_one(record, None).await.map_err(|e| {
            // The unique index closes the window between the check above and
            // the insert under concurrent creates.
            if is_duplicate_key(&e) {
                RepositoryError::AlreadyExists(record.language.clone())
            } else {
                RepositoryError::QueryFailed(e.to_string())
            }
        })?;

        Ok(record.clone())
    }

    #[instrument(skip(self, update))]
    async fn update(
        &self,
        language: &str,
        update: &AudioUpdate,
    ) -> Result<AudioRecord, RepositoryError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "language": language },
                doc! { "$set": {
                    "audio_url": &update.audio_url,
                    "text_content": &update.text_content,
                } },
                options,
            )
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        updated.ok_or_else(|| RepositoryError::NotFound(language.to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, language: &str) -> Result<(), RepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "language": language }, None)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound(language.to_string()));
        }

        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}
