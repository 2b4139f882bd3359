use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::shared::error_dto::ErrorResponse;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The Sarvam API answered with a non-success status. The status and the
    /// raw body are relayed to the caller under `tag`.
    #[error("{tag} ({status}): {details}")]
    UpstreamRejected {
        status: StatusCode,
        tag: &'static str,
        details: String,
    },

    #[error("No audio data returned")]
    NoAudioData,

    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    #[error("TTS failed: {0}")]
    TtsFailed(String),

    #[error("Invalid request body: {details}")]
    InvalidBody { status: StatusCode, details: String },

    #[error("Dev server unavailable: {0}")]
    DevServerUnavailable(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UpstreamRejected { status, .. } | Self::InvalidBody { status, .. } => *status,
            Self::DevServerUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::NoAudioData | Self::TranslationFailed(_) | Self::TtsFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to the public error envelope.
    ///
    /// Transport details stay in the logs; only upstream rejections and body
    /// rejections carry `details` to the caller.
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::UpstreamRejected { tag, details, .. } => {
                ErrorResponse::with_details(*tag, details.clone())
            }
            Self::NoAudioData => ErrorResponse::new("No audio data returned"),
            Self::TranslationFailed(_) => ErrorResponse::new("Translation failed"),
            Self::TtsFailed(_) => ErrorResponse::new("TTS failed"),
            Self::InvalidBody { details, .. } => {
                ErrorResponse::with_details("Invalid request body", details.clone())
            }
            Self::DevServerUnavailable(_) => ErrorResponse::new("Dev server unavailable"),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            details: rejection.body_text(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
