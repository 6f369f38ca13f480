//! HTTP request handlers

pub mod chat;
pub mod common;
pub mod convert;
pub mod health;
pub mod ocr;
pub mod speech;
pub mod upload;
