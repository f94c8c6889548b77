//! Session Loop
//!
//! Owns the engines and drives one conversation: listen, send the
//! transcript to the completion endpoint, sanitize the reply, speak it.
//! Strictly sequential, one exchange per utterance, until an exit
//! phrase is heard.

use crate::asr::AsrEngine;
use crate::completion::CompletionClient;
use crate::config::Config;
use crate::sanitize::sanitize;
use crate::tts::TtsEngine;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

/// What the loop should do after a transcript was handled
#[derive(Debug, PartialEq, Eq)]
pub enum Turn {
    Continue,
    Exit,
}

/// One interactive voice session: config plus the engines it talks through
pub struct Session {
    config: Config,
    asr: Box<dyn AsrEngine>,
    tts: Arc<dyn TtsEngine>,
    client: CompletionClient,
}

impl Session {
    pub fn new(
        config: Config,
        asr: Box<dyn AsrEngine>,
        tts: Arc<dyn TtsEngine>,
        client: CompletionClient,
    ) -> Self {
        Self {
            config,
            asr,
            tts,
            client,
        }
    }

    /// Build a session with the engines selected in config
    pub fn from_config(config: Config) -> Result<Self> {
        let client = CompletionClient::new(&config)?;
        let asr = crate::asr::create_engine(&config)?;
        let tts = crate::tts::create_engine(&config)?;
        Ok(Self::new(config, asr, tts, client))
    }

    /// Feed one audio chunk to ASR; engine faults are logged and skipped
    pub fn transcribe(&mut self, samples: &[i16]) -> Option<String> {
        match self.asr.process(samples) {
            Ok(Some(result)) => {
                info!(
                    "📝 Heard: '{}' (confidence {:.2})",
                    result.text, result.confidence
                );
                Some(result.text)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("ASR error, skipping chunk: {}", e);
                None
            }
        }
    }

    /// Handle one final transcript: exit check, completion, sanitize, speak
    pub async fn handle_transcript(&mut self, text: &str) -> Turn {
        if self.config.is_exit_phrase(text) {
            info!("👋 Exit phrase heard");
            self.tts.speak(&self.config.farewell).await.ok();
            return Turn::Exit;
        }

        match self.client.complete(text).await {
            Ok(reply) => {
                if let Some(clean) = self.speak_reply(&reply).await {
                    info!("💬 Reply: {}", clean);
                }
            }
            Err(e) => {
                warn!("❌ Completion failed: {}", e);
                self.tts.speak(&self.config.apology).await.ok();
            }
        }

        Turn::Continue
    }

    /// Sanitize a completion reply and speak it.
    ///
    /// Returns the cleaned text, or None when nothing speakable was left
    /// (e.g. the reply was a single code block).
    pub async fn speak_reply(&self, reply: &str) -> Option<String> {
        let clean = sanitize(reply);
        if clean.is_empty() {
            warn!("Reply sanitized to empty string, nothing to speak");
            return None;
        }

        if let Err(e) = self.tts.speak(&clean).await {
            warn!("TTS failed: {}", e);
        }
        Some(clean)
    }

    /// Run the session until the audio source closes or an exit phrase
    pub async fn run(&mut self, mut audio_rx: UnboundedReceiver<Vec<i16>>) -> Result<()> {
        info!(
            "✅ VoxChat ready - say one of {:?} to finish",
            self.config.exit_phrases
        );
        self.tts.speak(&self.config.greeting).await.ok();

        while let Some(samples) = audio_rx.recv().await {
            let Some(text) = self.transcribe(&samples) else {
                continue;
            };

            if self.handle_transcript(&text).await == Turn::Exit {
                break;
            }
        }

        Ok(())
    }
}
