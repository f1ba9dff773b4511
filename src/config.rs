/// Connection settings for the owner backend.
///
/// Values are usually taken from the environment so the same binary can be
/// pointed at a staging or production deployment without a rebuild:
/// - `TURF_API_BASE_URL` (defaults to the local development server)
/// - `TURF_API_TOKEN` (optional; requests are sent unauthenticated without it)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: Option<String>,
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token,
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("TURF_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let access_token = std::env::var("TURF_API_TOKEN").ok().filter(|t| !t.is_empty());

        Self { base_url, access_token }
    }
}
