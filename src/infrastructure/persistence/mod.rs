mod memory_audio_repository;
mod mongo;
mod mongo_audio_repository;

pub use memory_audio_repository::MemoryAudioRepository;
pub use mongo::connect;
pub use mongo_audio_repository::{MongoAudioRepository, COLLECTION_NAME};
