pub mod shared;
pub mod translation;
pub mod tts;
