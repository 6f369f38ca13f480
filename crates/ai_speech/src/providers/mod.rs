//! Speech provider implementations

pub mod google_tts;
pub mod whisper_cpp;

pub use google_tts::GoogleTtsProvider;
pub use whisper_cpp::WhisperCppProvider;
