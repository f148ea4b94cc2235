mod audio_service;

pub use audio_service::{AudioService, AudioServiceError, DatabaseStatus};
