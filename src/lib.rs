// Public API for the qwen-tts-relay library

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod trace;
pub mod tts;

// Re-export commonly used types
pub use errors::{RelayError, Result};
pub use state::AppState;
pub use tts::qwen_tts::qwen_tts::QwenTTS;
