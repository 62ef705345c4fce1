use std::env;

use qwen_tts_relay::config::Config;
use qwen_tts_relay::errors::constants;
use qwen_tts_relay::router::build_router;
use qwen_tts_relay::state::AppState;
use qwen_tts_relay::trace;

#[tokio::main]
async fn main() {
    // Load config
    let config = {
        let config = std::fs::read_to_string(constants::DEFAULT_CONFIG_PATH);
        if let Ok(config) = config {
            toml::from_str::<Config>(&config).expect("Cannot load config file.")
        } else {
            Config {
                bind_address: env::var("TTS_RELAY_BIND")
                    .unwrap_or_else(|_| constants::DEFAULT_BIND_ADDRESS.to_string()),
                upstream_url: env::var("TTS_RELAY_UPSTREAM_URL").ok(),
                api_key: env::var("TTS_RELAY_API_KEY").ok(),
                otel_http_url: env::var("TTS_RELAY_OTEL_URL").ok(),
            }
        }
    };

    let _otel_guard = trace::init_tracing_subscriber(&config.otel_http_url);

    // Create upstream TTS client
    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(err) => panic!("TTS client init error: {}", err),
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Cannot bind listen address.");

    tracing::info!("HTTP server listening on http://{}", config.bind_address);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /synthesize");
    tracing::info!("  POST /probe");

    if let Err(why) = axum::serve(listener, router).await {
        tracing::error!("Server error: {:?}", why);
    }
}
