use serde::{Deserialize, Serialize};

/// JSON shape of a successful upstream reply that carries an audio
/// reference instead of audio bytes.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SynthesizeResponse {
    pub output: Option<SynthesisOutput>,
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SynthesisOutput {
    pub audio: Option<SynthesisAudio>,
    /// Legacy field kept by the upstream API; only consulted when
    /// `audio.url` is absent.
    pub audio_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SynthesisAudio {
    pub url: Option<String>,
}

impl SynthesizeResponse {
    /// Resolve the audio reference: `output.audio.url` first, then the
    /// legacy `output.audio_url`.
    pub fn audio_reference(&self) -> Option<&str> {
        let output = self.output.as_ref()?;
        if let Some(url) = output.audio.as_ref().and_then(|audio| audio.url.as_deref()) {
            return Some(url);
        }
        output.audio_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_reference_primary_field() {
        let response: SynthesizeResponse =
            serde_json::from_str(r#"{"output":{"audio":{"url":"https://cdn/x.wav"}}}"#).unwrap();
        assert_eq!(response.audio_reference(), Some("https://cdn/x.wav"));
    }

    #[test]
    fn test_audio_reference_legacy_field() {
        let response: SynthesizeResponse =
            serde_json::from_str(r#"{"output":{"audio_url":"https://cdn/y.wav"}}"#).unwrap();
        assert_eq!(response.audio_reference(), Some("https://cdn/y.wav"));
    }

    #[test]
    fn test_audio_reference_prefers_primary_over_legacy() {
        let response: SynthesizeResponse = serde_json::from_str(
            r#"{"output":{"audio":{"url":"https://cdn/a.wav"},"audio_url":"https://cdn/b.wav"}}"#,
        )
        .unwrap();
        assert_eq!(response.audio_reference(), Some("https://cdn/a.wav"));
    }

    #[test]
    fn test_audio_reference_missing() {
        let response: SynthesizeResponse =
            serde_json::from_str(r#"{"output":{"finish_reason":"stop"}}"#).unwrap();
        assert_eq!(response.audio_reference(), None);

        let response: SynthesizeResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.audio_reference(), None);
    }
}
