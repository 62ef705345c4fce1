use crate::errors::constants;
use crate::tts::qwen_tts::structs::{
    synthesis_input::SynthesisInput, synthesis_parameters::SynthesisParameters,
};
use serde::{Deserialize, Serialize};

/// Body of an upstream synthesis call:
/// `{ model, input: { text, voice }, parameters: { language_type } }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SynthesizeRequest {
    pub model: String,
    pub input: SynthesisInput,
    pub parameters: SynthesisParameters,
}

impl SynthesizeRequest {
    /// Build a synthesis request, filling in upstream defaults for any
    /// field the caller left out.
    pub fn new(
        text: impl Into<String>,
        model: Option<String>,
        voice: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            model: model.unwrap_or_else(|| constants::DEFAULT_MODEL.to_string()),
            input: SynthesisInput {
                text: text.into(),
                voice: voice.unwrap_or_else(|| constants::DEFAULT_VOICE.to_string()),
            },
            parameters: SynthesisParameters {
                language_type: language.unwrap_or_else(|| constants::DEFAULT_LANGUAGE.to_string()),
            },
        }
    }

    /// Build the canned request used to validate an API key. Same shape
    /// as a real synthesis request, short fixed English text.
    pub fn probe(model: Option<String>, voice: Option<String>, language: Option<String>) -> Self {
        Self::new(
            constants::PROBE_TEXT,
            model,
            voice,
            Some(language.unwrap_or_else(|| constants::PROBE_LANGUAGE.to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let request = SynthesizeRequest::new("hello", None, None, None);
        assert_eq!(request.model, constants::DEFAULT_MODEL);
        assert_eq!(request.input.text, "hello");
        assert_eq!(request.input.voice, constants::DEFAULT_VOICE);
        assert_eq!(request.parameters.language_type, constants::DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_new_keeps_caller_values() {
        let request = SynthesizeRequest::new(
            "Hi",
            Some("qwen3-tts-flash-2".to_string()),
            Some("nova".to_string()),
            Some("English".to_string()),
        );
        assert_eq!(request.model, "qwen3-tts-flash-2");
        assert_eq!(request.input.voice, "nova");
        assert_eq!(request.parameters.language_type, "English");
    }

    #[test]
    fn test_voice_is_nested_under_input() {
        let request = SynthesizeRequest::new("hello", None, Some("nova".to_string()), None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["input"]["voice"], "nova");
        assert!(value["parameters"].get("voice").is_none());
    }

    #[test]
    fn test_probe_uses_canned_text_and_english_default() {
        let request = SynthesizeRequest::probe(None, None, None);
        assert_eq!(request.input.text, constants::PROBE_TEXT);
        assert_eq!(request.parameters.language_type, constants::PROBE_LANGUAGE);

        let request = SynthesizeRequest::probe(None, None, Some("Chinese".to_string()));
        assert_eq!(request.parameters.language_type, "Chinese");
    }
}
