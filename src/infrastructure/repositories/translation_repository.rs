use super::upstream_error::UpstreamError;
use crate::domain::translation::TranslatePayload;
use async_trait::async_trait;
use serde_json::Value;

/// Repository for translation calls.
/// Abstracts the HTTP transport to the translation provider.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Send a translation payload upstream
    ///
    /// Returns the upstream JSON body untouched on a success status.
    ///
    /// # Errors
    /// `UpstreamError::Rejected` for a non-success status, `Transport` or
    /// `InvalidBody` when no usable response came back
    async fn translate(&self, payload: &TranslatePayload) -> Result<Value, UpstreamError>;
}
