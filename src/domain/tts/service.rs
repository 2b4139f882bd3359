use super::error::TtsServiceError;
use super::text::truncate_chars;
use super::{SpeechPayload, SpeechRequest, MAX_TTS_CHARS};
use crate::infrastructure::repositories::SpeechRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct TtsService {
    speech_repo: Arc<dyn SpeechRepository>,
}

impl TtsService {
    pub fn new(speech_repo: Arc<dyn SpeechRepository>) -> Self {
        Self { speech_repo }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize speech for the given text
    ///
    /// This operation:
    /// - Truncates the text to the first 500 characters
    /// - Calls the Sarvam TTS API with the fixed speaker and model
    /// - Checks that at least one audio clip came back
    ///
    /// Returns the upstream JSON body as-is
    async fn synthesize(&self, request: SpeechRequest) -> Result<Value, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: SpeechRequest) -> Result<Value, TtsServiceError> {
        let original_length = request.text.chars().count();
        let text = if original_length > MAX_TTS_CHARS {
            tracing::info!(
                original_length,
                truncated_length = MAX_TTS_CHARS,
                "Truncating TTS text"
            );
            truncate_chars(&request.text, MAX_TTS_CHARS).to_string()
        } else {
            request.text
        };

        tracing::info!(
            target_language_code = %request.target_language_code,
            "Generating TTS for {}",
            request.target_language_code
        );

        let payload = SpeechPayload::new(text, request.target_language_code);

        let data = self.speech_repo.synthesize(&payload).await.map_err(|e| {
            let err = TtsServiceError::from(e);
            match &err {
                TtsServiceError::Rejected { status, details } => tracing::error!(
                    status = *status,
                    details = %details,
                    "Sarvam TTS API error"
                ),
                _ => tracing::error!(error = %err, "TTS proxy error"),
            }
            err
        })?;

        let first_audio_length = first_audio(&data).map(str::len);
        match first_audio_length {
            Some(audio_length) => {
                tracing::info!(audio_length, "TTS successful");
                Ok(data)
            }
            None => {
                tracing::error!(response = %data, "Sarvam TTS returned no audio data");
                Err(TtsServiceError::NoAudio)
            }
        }
    }
}

/// First entry of the `audios` array, if it is present and a string
fn first_audio(data: &Value) -> Option<&str> {
    data.get("audios")?.as_array()?.first()?.as_str()
}
