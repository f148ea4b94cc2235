use std::sync::Arc;

use crate::application::services::AudioService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub audio_service: Arc<AudioService>,
    pub settings: Settings,
}
