//! ASR (Automatic Speech Recognition) Module
//!
//! The speech-to-text seam of the client: audio samples in, optional
//! transcript out. The session treats engines as black boxes.

pub mod vosk;

use crate::config::Config;
use anyhow::Result;

// Re-export main types
pub use vosk::VoskAsr;

/// Result from ASR with confidence score
#[derive(Debug, Clone)]
pub struct AsrResult {
    pub text: String,
    pub confidence: f32,
}

/// Minimum confidence threshold (below this, results are discarded)
pub const MIN_CONFIDENCE: f32 = 0.5;

/// Trait for ASR engines
pub trait AsrEngine: Send {
    /// Process audio samples and return recognized text with confidence
    /// (if final). Results below MIN_CONFIDENCE are filtered internally.
    fn process(&mut self, samples: &[i16]) -> Result<Option<AsrResult>>;

    /// Reset the recognizer state
    fn reset(&mut self);
}

/// Factory to create the configured ASR engine
pub fn create_engine(config: &Config) -> Result<Box<dyn AsrEngine>> {
    match config.asr_engine.as_str() {
        "vosk" => Ok(Box::new(vosk::VoskAsr::new(config)?)),
        other => {
            tracing::warn!("Unknown ASR engine '{}', falling back to vosk", other);
            Ok(Box::new(vosk::VoskAsr::new(config)?))
        }
    }
}
