use super::upstream_error::UpstreamError;
use crate::domain::tts::SpeechPayload;
use async_trait::async_trait;
use serde_json::Value;

/// Repository for text-to-speech calls.
///
/// Implementations only move bytes: they do not inspect the audio list,
/// that check belongs to the TTS service.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    async fn synthesize(&self, payload: &SpeechPayload) -> Result<Value, UpstreamError>;
}
