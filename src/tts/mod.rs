pub mod qwen_tts;
