use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::tts::{SpeechRequest, TtsService, TtsServiceApi},
    error::AppResult,
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts - Convert text to speech
    ///
    /// Responds with the Sarvam JSON body, base64 audio under `audios`.
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<SpeechRequest>, JsonRejection>,
    ) -> AppResult<Json<Value>> {
        let Json(request) = payload?;

        let data = controller.tts_service.synthesize(request).await?;

        Ok(Json(data))
    }
}
