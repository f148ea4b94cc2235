mod audio_record;
mod sample_data;

pub use audio_record::{AudioRecord, AudioUpdate};
pub use sample_data::sample_records;
