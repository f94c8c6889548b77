//! Mock ASR Engine for Testing
//!
//! Provides controlled transcripts for integration tests.

use anyhow::Result;
use std::sync::{Arc, Mutex};
use voxchat::asr::{AsrEngine, AsrResult};

/// Mock ASR engine that returns predetermined transcripts
pub struct MockAsr {
    /// Queue of results to return, one per processed chunk
    pub responses: Vec<AsrResult>,
    /// Current index in responses
    idx: usize,
    /// Record all audio chunks received (for verification)
    pub received_chunks: Arc<Mutex<Vec<Vec<i16>>>>,
}

impl MockAsr {
    pub fn new(responses: Vec<AsrResult>) -> Self {
        Self {
            responses,
            idx: 0,
            received_chunks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that returns a single phrase
    pub fn with_phrase(text: &str, confidence: f32) -> Self {
        Self::new(vec![AsrResult {
            text: text.to_string(),
            confidence,
        }])
    }
}

impl AsrEngine for MockAsr {
    fn process(&mut self, samples: &[i16]) -> Result<Option<AsrResult>> {
        // Record received audio
        if let Ok(mut chunks) = self.received_chunks.lock() {
            chunks.push(samples.to_vec());
        }

        // Return next response if available
        if self.idx < self.responses.len() {
            let result = self.responses[self.idx].clone();
            self.idx += 1;
            Ok(Some(result))
        } else {
            Ok(None)
        }
    }

    fn reset(&mut self) {
        self.idx = 0;
    }
}
