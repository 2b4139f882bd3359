use crate::error::AppError;
use crate::infrastructure::repositories::UpstreamError;
use axum::http::StatusCode;

pub const TTS_REJECTED_TAG: &str = "Sarvam TTS error";

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("upstream rejected synthesis ({status}): {details}")]
    Rejected { status: u16, details: String },
    /// The API answered with a success status but no audio
    #[error("no audio data returned")]
    NoAudio,
    #[error("synthesis failed: {0}")]
    Failed(String),
}

impl From<UpstreamError> for TtsServiceError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Rejected { status, body } => TtsServiceError::Rejected {
                status,
                details: body,
            },
            other => TtsServiceError::Failed(other.to_string()),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Rejected { status, details } => AppError::UpstreamRejected {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                tag: TTS_REJECTED_TAG,
                details,
            },
            TtsServiceError::NoAudio => AppError::NoAudioData,
            TtsServiceError::Failed(msg) => AppError::TtsFailed(msg),
        }
    }
}
