//! Vosk ASR engine (local offline recognition)

use crate::config::Config;
use anyhow::{Context, Result};
use tracing::{debug, info};
use vosk::{Model, Recognizer};

const SAMPLE_RATE: f32 = 16000.0;

/// Vosk-based ASR engine
pub struct VoskAsr {
    recognizer: Recognizer,
}

impl VoskAsr {
    /// Create a new Vosk ASR instance
    pub fn new(config: &Config) -> Result<Self> {
        let model_path = std::path::PathBuf::from(&config.vosk_model_path);

        if !model_path.exists() {
            return Err(anyhow::anyhow!(
                "Vosk model not found at {}",
                model_path.display()
            ));
        }

        info!("Loading Vosk model from: {}", model_path.display());

        let model_str = model_path.to_str().ok_or_else(|| {
            anyhow::anyhow!(
                "Vosk model path is not valid UTF-8: {}",
                model_path.display()
            )
        })?;

        let model = Model::new(model_str).context("Failed to load Vosk model")?;
        let recognizer =
            Recognizer::new(&model, SAMPLE_RATE).context("Failed to create Vosk recognizer")?;

        Ok(Self { recognizer })
    }
}

impl super::AsrEngine for VoskAsr {
    fn process(&mut self, samples: &[i16]) -> Result<Option<super::AsrResult>> {
        let state = self.recognizer.accept_waveform(samples);

        match state {
            vosk::DecodingState::Finalized => {
                let result = self.recognizer.final_result();
                if let Some(single) = result.single() {
                    if let Some(text) = extract_text(single.text) {
                        // Average word confidence across the utterance
                        let avg_confidence = if single.result.is_empty() {
                            1.0f32 // Default if no word-level info
                        } else {
                            let sum: f32 = single.result.iter().map(|w| w.conf).sum();
                            sum / single.result.len() as f32
                        };

                        if avg_confidence < super::MIN_CONFIDENCE {
                            info!(
                                "🔇 Rejecting low-confidence ASR ({:.2}): '{}'",
                                avg_confidence, text
                            );
                            return Ok(None);
                        }

                        return Ok(Some(super::AsrResult {
                            text,
                            confidence: avg_confidence,
                        }));
                    }
                }
            }
            vosk::DecodingState::Running => {
                debug!("Partial: {}", self.recognizer.partial_result().partial);
            }
            vosk::DecodingState::Failed => {
                debug!("Decoding failed for this chunk");
            }
        }

        Ok(None)
    }

    fn reset(&mut self) {
        self.recognizer.reset();
    }
}

/// Extract text from Vosk result, filtering empty results
fn extract_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
