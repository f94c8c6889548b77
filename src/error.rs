//! VoxChat Error Types
//!
//! Centralized error handling for the voice chat client.

use thiserror::Error;

/// Central error type for VoxChat
#[derive(Error, Debug)]
pub enum VoxError {
    #[error("ASR engine error: {0}")]
    Asr(String),

    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Audio capture error: {0}")]
    Audio(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Completion API error: {0}")]
    Completion(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for VoxChat operations
pub type VoxResult<T> = Result<T, VoxError>;
