//! AI Speech - Speech-to-Text and Text-to-Speech providers
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe an audio file to text (STT)
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - whisper.cpp (local STT), with FFmpeg normalizing input audio
//! - Google Translate TTS endpoint (remote TTS, MP3 output)

pub mod config;
pub mod converter;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::{GoogleTtsConfig, SpeechConfig, WhisperCppConfig};
pub use converter::AudioConverter;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::{GoogleTtsProvider, WhisperCppProvider};
pub use types::{AudioData, AudioFormat, Transcription};
