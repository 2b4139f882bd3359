/// Outcome of a failed call to the Sarvam API.
///
/// `Rejected` means the API answered with a non-success status; the other two
/// variants mean no usable answer came back at all.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream responded with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}
