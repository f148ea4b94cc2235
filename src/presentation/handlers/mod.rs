mod audio;
mod health;

pub use audio::{
    create_audio_handler, delete_audio_handler, get_audio_handler, list_audio_handler,
    update_audio_handler,
};
pub use health::health_handler;
