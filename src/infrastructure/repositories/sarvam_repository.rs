use super::speech_repository::SpeechRepository;
use super::translation_repository::TranslationRepository;
use super::upstream_error::UpstreamError;
use crate::domain::translation::TranslatePayload;
use crate::domain::tts::SpeechPayload;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_SARVAM_BASE_URL: &str = "https://api.sarvam.ai";
const API_KEY_HEADER: &str = "api-subscription-key";
const TRANSLATE_PATH: &str = "/translate";
const TEXT_TO_SPEECH_PATH: &str = "/text-to-speech";

/// Sarvam AI implementation of the translation and speech repositories
pub struct SarvamRepository {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl SarvamRepository {
    /// Build a client for `base_url`.
    ///
    /// `timeout` bounds every call end to end; `None` leaves the call
    /// unbounded.
    pub fn new(
        base_url: String,
        api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http_client: builder.build()?,
        })
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| UpstreamError::Transport(e.to_string()))?;
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::InvalidBody(e.to_string()))
    }
}

#[async_trait]
impl TranslationRepository for SarvamRepository {
    async fn translate(&self, payload: &TranslatePayload) -> Result<Value, UpstreamError> {
        tracing::debug!(
            target_language_code = %payload.target_language_code,
            input_length = payload.input.chars().count(),
            "Calling Sarvam translate API"
        );
        self.post_json(TRANSLATE_PATH, payload).await
    }
}

#[async_trait]
impl SpeechRepository for SarvamRepository {
    async fn synthesize(&self, payload: &SpeechPayload) -> Result<Value, UpstreamError> {
        tracing::debug!(
            target_language_code = %payload.target_language_code,
            speaker = payload.speaker,
            model = payload.model,
            "Calling Sarvam text-to-speech API"
        );
        self.post_json(TEXT_TO_SPEECH_PATH, payload).await
    }
}
