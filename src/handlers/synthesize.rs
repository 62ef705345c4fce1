use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::{constants, validation, RelayError, Result};
use crate::state::AppState;
use crate::tts::qwen_tts::structs::synthesize_request::SynthesizeRequest;

#[derive(Debug, Deserialize)]
pub struct SynthesizeBody {
    pub text: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
    pub language: Option<String>,
}

/// POST /synthesize - relay text to the upstream TTS API and return the
/// audio bytes as a WAV attachment.
pub async fn synthesize(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SynthesizeBody>,
) -> Result<Response> {
    let text = body.text.unwrap_or_default();
    validation::validate_tts_text(&text)?;

    let api_key = resolve_api_key(&headers, &state)?;

    let request = SynthesizeRequest::new(text, body.model, body.voice, body.language);
    let audio = state.tts.synthesize(request, &api_key).await?;

    Ok((
        [
            (header::CONTENT_TYPE, constants::OUTPUT_MIME),
            (header::CONTENT_DISPOSITION, constants::OUTPUT_DISPOSITION),
        ],
        audio,
    )
        .into_response())
}

/// Resolve the upstream API key: caller-supplied header first, then the
/// configured server-side fallback. There is no compiled-in default.
fn resolve_api_key(headers: &HeaderMap, state: &AppState) -> Result<String> {
    if let Some(value) = headers
        .get(constants::API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        if !value.trim().is_empty() {
            return Ok(value.to_string());
        }
    }

    state
        .fallback_api_key
        .clone()
        .ok_or_else(|| RelayError::invalid_input("Please provide a valid API Key"))
}
