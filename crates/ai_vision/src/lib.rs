//! AI Vision - optical character recognition
//!
//! - `TextRecognizer` - extract printed text from an image file
//! - `TesseractProvider` - local OCR through the tesseract CLI

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;

pub use config::OcrConfig;
pub use error::VisionError;
pub use ports::TextRecognizer;
pub use providers::TesseractProvider;
