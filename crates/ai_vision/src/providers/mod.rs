//! Vision provider implementations

pub mod tesseract;

pub use tesseract::TesseractProvider;
