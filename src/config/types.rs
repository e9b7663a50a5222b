use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Connection settings for the generative content service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL for the API (default: "https://generativelanguage.googleapis.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Direct API key. Falls back to the `LEXICON_API_KEY` env var.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model used for dictionary, phrase and quiz content.
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model used for speech synthesis.
    #[serde(default = "default_speech_model")]
    pub speech_model: String,
    /// Prebuilt voice name for speech synthesis (default: "Kore").
    #[serde(default = "default_voice")]
    pub voice: String,
}

/// Where favorites and history are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_voice() -> String {
    "Kore".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            text_model: default_text_model(),
            speech_model: default_speech_model(),
            voice: default_voice(),
        }
    }
}
