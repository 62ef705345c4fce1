use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{validation, Result};
use crate::state::AppState;
use crate::tts::qwen_tts::structs::synthesize_request::SynthesizeRequest;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeBody {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
    pub language: Option<String>,
}

/// Success body of a probe. Failure reasons travel in the `{error}`
/// envelope with the matching status code, never in this shape.
#[derive(Debug, Serialize)]
pub struct ProbeResult {
    pub success: bool,
}

/// POST /probe - validate an API key with a canned synthesis call.
/// The audio result, if any, is discarded.
pub async fn probe(
    State(state): State<AppState>,
    Json(body): Json<ProbeBody>,
) -> Result<Json<ProbeResult>> {
    let api_key = body.api_key.unwrap_or_default();
    validation::validate_api_key(&api_key)?;

    let request = SynthesizeRequest::probe(body.model, body.voice, body.language);
    state.tts.probe(request, &api_key).await?;

    Ok(Json(ProbeResult { success: true }))
}
