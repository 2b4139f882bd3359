pub mod error;
pub mod service;

pub use error::TranslationServiceError;
pub use service::{TranslationService, TranslationServiceApi};

use serde::{Deserialize, Serialize};

/// Source language of every translation; the front-end only produces English
pub const SOURCE_LANGUAGE_CODE: &str = "en-IN";
pub const TRANSLATION_MODEL: &str = "sarvam-translate:v1";

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language_code: String,
}

/// Body sent to the Sarvam translate endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatePayload {
    pub input: String,
    pub source_language_code: &'static str,
    pub target_language_code: String,
    pub model: &'static str,
}

impl TranslatePayload {
    pub fn new(input: String, target_language_code: String) -> Self {
        Self {
            input,
            source_language_code: SOURCE_LANGUAGE_CODE,
            target_language_code,
            model: TRANSLATION_MODEL,
        }
    }
}
