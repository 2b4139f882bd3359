pub mod sarvam_repository;
pub mod speech_repository;
pub mod translation_repository;
pub mod upstream_error;

pub use sarvam_repository::SarvamRepository;
pub use speech_repository::SpeechRepository;
pub use translation_repository::TranslationRepository;
pub use upstream_error::UpstreamError;
