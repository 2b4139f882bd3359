use super::error::TranslationServiceError;
use super::{TranslatePayload, TranslationRequest};
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(translation_repo: Arc<dyn TranslationRepository>) -> Self {
        Self { translation_repo }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate English text into the requested language
    ///
    /// The source language and model are fixed; only the target language
    /// comes from the caller. Returns the upstream JSON body as-is.
    async fn translate(&self, request: TranslationRequest)
        -> Result<Value, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Value, TranslationServiceError> {
        tracing::info!(
            target_language_code = %request.target_language_code,
            text_length = request.text.chars().count(),
            "Translating to {}",
            request.target_language_code
        );

        let payload = TranslatePayload::new(request.text, request.target_language_code);

        match self.translation_repo.translate(&payload).await {
            Ok(data) => {
                tracing::info!("Translation successful");
                Ok(data)
            }
            Err(err) => {
                let err = TranslationServiceError::from(err);
                match &err {
                    TranslationServiceError::Rejected { status, details } => tracing::error!(
                        status = *status,
                        details = %details,
                        "Sarvam translation API error"
                    ),
                    TranslationServiceError::Failed(msg) => {
                        tracing::error!(error = %msg, "Translation proxy error")
                    }
                }
                Err(err)
            }
        }
    }
}
