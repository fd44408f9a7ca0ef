//! Short-text translation through the public Google Translate endpoint.

pub mod client;
pub mod error;

pub use client::{GoogleTranslateClient, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
pub use error::TranslateError;
