use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Config {
    /// Address the HTTP server binds to, e.g. "0.0.0.0:3000".
    pub bind_address: String,
    /// Override for the upstream synthesis endpoint. Defaults to DashScope.
    pub upstream_url: Option<String>,
    /// Server-side fallback API key used when a caller omits the
    /// `x-api-key` header. There is no compiled-in default; requests
    /// without a key fail when this is unset.
    pub api_key: Option<String>,
    pub otel_http_url: Option<String>,
}
