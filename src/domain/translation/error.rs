use crate::error::AppError;
use crate::infrastructure::repositories::UpstreamError;
use axum::http::StatusCode;

pub const TRANSLATION_REJECTED_TAG: &str = "Sarvam API error";

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("upstream rejected translation ({status}): {details}")]
    Rejected { status: u16, details: String },
    #[error("translation failed: {0}")]
    Failed(String),
}

impl From<UpstreamError> for TranslationServiceError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Rejected { status, body } => TranslationServiceError::Rejected {
                status,
                details: body,
            },
            other => TranslationServiceError::Failed(other.to_string()),
        }
    }
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Rejected { status, details } => AppError::UpstreamRejected {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                tag: TRANSLATION_REJECTED_TAG,
                details,
            },
            TranslationServiceError::Failed(msg) => AppError::TranslationFailed(msg),
        }
    }
}
