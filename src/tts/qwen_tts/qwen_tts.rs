use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::errors::{constants, RelayError, Result};
use crate::tts::qwen_tts::structs::{
    error_response::ErrorResponse, synthesize_request::SynthesizeRequest,
    synthesize_response::SynthesizeResponse,
};

/// Client for the upstream Qwen TTS HTTP API.
#[derive(Clone, Debug)]
pub struct QwenTTS {
    client: reqwest::Client,
    endpoint: String,
}

/// Successful upstream reply, classified once on the content-type header.
/// The same logical request may legitimately produce either shape.
#[derive(Debug)]
pub enum UpstreamReply {
    /// JSON document carrying an audio URL that must be fetched separately.
    JsonAudioRef(SynthesizeResponse),
    /// The response body itself is the audio.
    RawAudio(Bytes),
}

impl QwenTTS {
    pub fn new(endpoint: Option<String>) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_secs(constants::TTS_TIMEOUT_SECS))
    }

    /// Build a client with an explicit per-call timeout. The timeout bounds
    /// each outbound call; expiry surfaces as an upstream error.
    pub fn with_timeout(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.unwrap_or_else(|| constants::UPSTREAM_URL.to_string()),
        })
    }

    /// Synthesize text to speech and return the audio bytes.
    ///
    /// Issues at most two outbound calls: the synthesis POST, and a GET for
    /// the audio file when the upstream replies with a JSON audio reference.
    /// The second call is never issued speculatively and nothing is retried.
    #[tracing::instrument(skip(self, api_key))]
    pub async fn synthesize(&self, request: SynthesizeRequest, api_key: &str) -> Result<Vec<u8>> {
        let response = self.send(&request, api_key).await?;

        match Self::classify(response).await? {
            UpstreamReply::RawAudio(bytes) => Ok(bytes.to_vec()),
            UpstreamReply::JsonAudioRef(body) => {
                let url = body
                    .audio_reference()
                    .ok_or_else(|| RelayError::malformed_response("No audio data in API response"))?
                    .to_string();
                tracing::info!(url = %url, "fetching audio file from upstream reference");
                self.fetch_audio(&url).await
            }
        }
    }

    /// Exercise the upstream API with a canned request to check whether an
    /// API key is accepted. Any success status is a pass; the response body
    /// is discarded and a referenced audio file is never fetched.
    #[tracing::instrument(skip(self, api_key))]
    pub async fn probe(&self, request: SynthesizeRequest, api_key: &str) -> Result<()> {
        self.send(&request, api_key).await?;
        Ok(())
    }

    async fn send(&self, request: &SynthesizeRequest, api_key: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .json(request)
            .send()
            .await
            .map_err(|err| RelayError::upstream(format!("API request failed: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("API request failed: {}", status.as_u16()));
            return Err(RelayError::upstream(message));
        }

        Ok(response)
    }

    async fn classify(response: reqwest::Response) -> Result<UpstreamReply> {
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        if is_json {
            let body = response
                .json::<SynthesizeResponse>()
                .await
                .map_err(|err| RelayError::malformed_response(err.to_string()))?;
            Ok(UpstreamReply::JsonAudioRef(body))
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(|err| RelayError::upstream(format!("API request failed: {}", err)))?;
            Ok(UpstreamReply::RawAudio(bytes))
        }
    }

    async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| RelayError::upstream(format!("Failed to fetch audio file: {}", err)))?;

        if !response.status().is_success() {
            return Err(RelayError::upstream(format!(
                "Failed to fetch audio file: {}",
                response.status().as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| RelayError::upstream(format!("Failed to fetch audio file: {}", err)))?;
        Ok(bytes.to_vec())
    }
}
