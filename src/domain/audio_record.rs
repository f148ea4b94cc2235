use serde::{Deserialize, Serialize};

/// A single narration entry: one audio resource plus its transcript,
/// keyed by language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRecord {
    pub id: String,
    pub language: String,
    pub audio_url: String,
    pub text_content: String,
}

/// The mutable subset of an [`AudioRecord`]. `language` and `id` are fixed
/// once a record exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpdate {
    pub audio_url: String,
    pub text_content: String,
}

impl AudioRecord {
    /// Builds a record with its id derived from the language key. Callers
    /// never supply the id directly.
    pub fn new(language: String, audio_url: String, text_content: String) -> Self {
        let id = Self::derive_id(&language);
        Self {
            id,
            language,
            audio_url,
            text_content,
        }
    }

    pub fn derive_id(language: &str) -> String {
        format!("{}_audio", language)
    }

    pub fn apply(&mut self, update: &AudioUpdate) {
        self.audio_url = update.audio_url.clone();
        self.text_content = update.text_content.clone();
    }
}
