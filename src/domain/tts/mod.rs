pub mod error;
pub mod service;
pub mod text;

pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi};

use serde::{Deserialize, Serialize};

/// Longest text forwarded to the speech API, in characters
pub const MAX_TTS_CHARS: usize = 500;
pub const TTS_SPEAKER: &str = "vidya";
pub const TTS_MODEL: &str = "bulbul:v2";

/// Request for POST /api/tts
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub target_language_code: String,
}

/// Body sent to the Sarvam text-to-speech endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechPayload {
    pub inputs: Vec<String>,
    pub target_language_code: String,
    pub speaker: &'static str,
    pub model: &'static str,
}

impl SpeechPayload {
    pub fn new(text: String, target_language_code: String) -> Self {
        Self {
            inputs: vec![text],
            target_language_code,
            speaker: TTS_SPEAKER,
            model: TTS_MODEL,
        }
    }
}
