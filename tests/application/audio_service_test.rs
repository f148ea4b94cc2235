use std::sync::Arc;

use narvik::application::ports::AudioRepository;
use narvik::application::services::{AudioService, AudioServiceError, DatabaseStatus};
use narvik::domain::{sample_records, AudioRecord, AudioUpdate};
use narvik::infrastructure::persistence::MemoryAudioRepository;

use crate::helpers::FailingAudioRepository;

fn record(language: &str) -> AudioRecord {
    AudioRecord::new(language.to_string(), "u".to_string(), "t".to_string())
}

fn connected_service(primary_records: Vec<AudioRecord>) -> AudioService {
    let primary: Arc<dyn AudioRepository> =
        Arc::new(MemoryAudioRepository::with_records(primary_records));
    let fallback: Arc<dyn AudioRepository> = Arc::new(MemoryAudioRepository::new());
    AudioService::new(Some(primary), fallback)
}

fn fallback_only_service() -> AudioService {
    let fallback: Arc<dyn AudioRepository> =
        Arc::new(MemoryAudioRepository::with_records(sample_records()));
    AudioService::new(None, fallback)
}

fn outage_service(fallback: Arc<MemoryAudioRepository>) -> AudioService {
    let primary: Arc<dyn AudioRepository> = Arc::new(FailingAudioRepository);
    AudioService::new(Some(primary), fallback)
}

#[tokio::test]
async fn given_connected_primary_when_listing_then_records_are_sorted_by_language() {
    let service = connected_service(vec![record("french"), record("arabic"), record("english")]);

    let records = service.list().await.unwrap();

    let languages: Vec<&str> = records.iter().map(|r| r.language.as_str()).collect();
    assert_eq!(languages, vec!["arabic", "english", "french"]);
}

#[tokio::test]
async fn given_failing_primary_when_listing_then_fallback_is_sorted_identically() {
    let fallback = Arc::new(MemoryAudioRepository::with_records(vec![
        record("french"),
        record("arabic"),
        record("english"),
    ]));
    let service = outage_service(fallback);

    let records = service.list().await.unwrap();

    let languages: Vec<&str> = records.iter().map(|r| r.language.as_str()).collect();
    assert_eq!(languages, vec!["arabic", "english", "french"]);
}

#[tokio::test]
async fn given_failing_primary_when_creating_then_write_lands_in_fallback() {
    let fallback = Arc::new(MemoryAudioRepository::new());
    let service = outage_service(Arc::clone(&fallback));

    let created = service
        .create("french".to_string(), "u".to_string(), "t".to_string())
        .await
        .unwrap();

    assert_eq!(created.id, "french_audio");
    let stored = fallback.get("french").await.unwrap();
    assert_eq!(stored, Some(created));
}

#[tokio::test]
async fn given_failing_primary_when_calls_fail_then_connected_flag_is_not_flipped() {
    let fallback = Arc::new(MemoryAudioRepository::with_records(sample_records()));
    let service = outage_service(fallback);

    service.list().await.unwrap();
    service.get("english").await.unwrap();

    // Per-call errors fall back for that call only; only the startup probe
    // decides connectivity.
    assert!(service.is_connected());
}

#[tokio::test]
async fn given_duplicate_on_primary_when_creating_then_error_surfaces_without_fallback_write() {
    let primary: Arc<dyn AudioRepository> =
        Arc::new(MemoryAudioRepository::with_records(vec![record("french")]));
    let fallback = Arc::new(MemoryAudioRepository::new());
    let service = AudioService::new(
        Some(primary),
        Arc::clone(&fallback) as Arc<dyn AudioRepository>,
    );

    let result = service
        .create("french".to_string(), "u".to_string(), "t".to_string())
        .await;

    assert!(matches!(result, Err(AudioServiceError::AlreadyExists(_))));
    assert_eq!(fallback.get("french").await.unwrap(), None);
}

#[tokio::test]
async fn given_created_record_when_getting_then_round_trips() {
    let service = fallback_only_service();

    let created = service
        .create("french".to_string(), "u".to_string(), "t".to_string())
        .await
        .unwrap();
    let fetched = service.get("french").await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn given_absent_language_when_updating_then_not_found_and_no_state_change() {
    let service = fallback_only_service();
    let before = service.list().await.unwrap();

    let result = service
        .update(
            "klingon",
            AudioUpdate {
                audio_url: "u2".to_string(),
                text_content: "t2".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AudioServiceError::NotFound(_))));
    assert_eq!(service.list().await.unwrap(), before);
}

#[tokio::test]
async fn given_deleted_language_when_getting_then_not_found() {
    let service = fallback_only_service();

    service.delete("english").await.unwrap();
    let result = service.get("english").await;

    assert!(matches!(result, Err(AudioServiceError::NotFound(_))));
}

#[tokio::test]
async fn given_connected_primary_when_checking_status_then_reports_connected() {
    let service = connected_service(vec![]);

    assert_eq!(service.database_status().await, DatabaseStatus::Connected);
}

#[tokio::test]
async fn given_no_primary_when_checking_status_then_reports_fallback_mode() {
    let service = fallback_only_service();

    assert_eq!(service.database_status().await, DatabaseStatus::FallbackMode);
}

#[tokio::test]
async fn given_failing_primary_when_checking_status_then_reports_error() {
    let fallback = Arc::new(MemoryAudioRepository::new());
    let service = outage_service(fallback);

    assert_eq!(service.database_status().await, DatabaseStatus::Error);
}
