use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the stored API token
pub const TOKEN_ENV_VAR: &str = "VOXCHAT_API_TOKEN";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Speech
    pub asr_engine: String,
    pub tts_engine: String,
    pub vosk_model_path: String,
    pub piper_voice: String,

    // Completion API
    pub api_url: String,
    pub api_model: String,
    pub api_token: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout: u64,

    // Session
    pub exit_phrases: Vec<String>,
    pub greeting: String,
    pub farewell: String,
    pub apology: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asr_engine: "vosk".to_string(),
            tts_engine: "piper".to_string(),
            vosk_model_path: dirs::data_dir()
                .unwrap_or_default()
                .join("voxchat/models/vosk-model-small-en-us")
                .to_string_lossy()
                .to_string(),
            piper_voice: "en_US-lessac-medium".to_string(),
            api_url: "https://llm.chutes.ai/v1/chat/completions".to_string(),
            api_model: "deepseek-ai/DeepSeek-V3-0324".to_string(),
            api_token: "".to_string(),
            max_tokens: 1024,
            temperature: 0.7,
            request_timeout: 30,
            exit_phrases: vec![
                "exit".to_string(),
                "quit".to_string(),
                "goodbye".to_string(),
            ],
            greeting: "Voice assistant started. How can I help?".to_string(),
            farewell: "Goodbye!".to_string(),
            apology: "Sorry, I could not get a response.".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = path.with_extension("json.corrupt");
                    let _ = std::fs::rename(path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the API token: environment variable wins over the config file
    pub fn resolved_api_token(&self) -> Option<String> {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                return Some(token);
            }
        }
        if self.api_token.is_empty() {
            None
        } else {
            Some(self.api_token.clone())
        }
    }

    /// Check whether a transcript is one of the configured exit phrases
    pub fn is_exit_phrase(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        self.exit_phrases.iter().any(|p| p.to_lowercase() == text)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voxchat")
        .join("config.json")
}
