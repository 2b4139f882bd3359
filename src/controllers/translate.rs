use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::translation::{TranslationRequest, TranslationService, TranslationServiceApi},
    error::AppResult,
};

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate English text via Sarvam
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        payload: Result<Json<TranslationRequest>, JsonRejection>,
    ) -> AppResult<Json<Value>> {
        let Json(request) = payload?;

        let data = controller.translation_service.translate(request).await?;

        Ok(Json(data))
    }
}
