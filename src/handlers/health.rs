use axum::Json;

/// GET /health - Health check
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "qwen-tts-relay"
    }))
}
