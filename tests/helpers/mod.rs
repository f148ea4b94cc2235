use async_trait::async_trait;

use narvik::application::ports::{AudioRepository, RepositoryError};
use narvik::domain::{AudioRecord, AudioUpdate};
use narvik::presentation::{CorsSettings, DatabaseSettings, ServerSettings, Settings};

/// Simulates a primary store whose every call fails at the infrastructure
/// level, as during a network outage.
pub struct FailingAudioRepository;

#[async_trait]
impl AudioRepository for FailingAudioRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::ConnectionFailed(
            "simulated outage".to_string(),
        ))
    }

    async fn list(&self) -> Result<Vec<AudioRecord>, RepositoryError> {
        Err(RepositoryError::QueryFailed("simulated outage".to_string()))
    }

    async fn get(&self, _language: &str) -> Result<Option<AudioRecord>, RepositoryError> {
        Err(RepositoryError::QueryFailed("simulated outage".to_string()))
    }

    async fn create(&self, _record: &AudioRecord) -> Result<AudioRecord, RepositoryError> {
        Err(RepositoryError::QueryFailed("simulated outage".to_string()))
    }

    async fn update(
        &self,
        _language: &str,
        _update: &AudioUpdate,
    ) -> Result<AudioRecord, RepositoryError> {
        Err(RepositoryError::QueryFailed("simulated outage".to_string()))
    }

    async fn delete(&self, _language: &str) -> Result<(), RepositoryError> {
        Err(RepositoryError::QueryFailed("simulated outage".to_string()))
    }
}

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "mongodb://localhost:27017".to_string(),
            name: "narration_test".to_string(),
        },
        cors: CorsSettings::from_list("*"),
    }
}
