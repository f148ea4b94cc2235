mod audio_repository;
mod repository_error;

pub use audio_repository::AudioRepository;
pub use repository_error::RepositoryError;
