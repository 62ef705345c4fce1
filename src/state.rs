use crate::config::Config;
use crate::errors::Result;
use crate::tts::qwen_tts::qwen_tts::QwenTTS;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream TTS client
    pub tts: QwenTTS,
    /// Server-side fallback key for callers that omit `x-api-key`
    pub fallback_api_key: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            tts: QwenTTS::new(config.upstream_url.clone())?,
            fallback_api_key: config.api_key.clone(),
        })
    }
}
