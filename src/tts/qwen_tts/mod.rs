pub mod qwen_tts;
pub mod structs;
