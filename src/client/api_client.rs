use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::error_dto::ApiErrorBody;
use crate::client::endpoint::Endpoint;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Thin wrapper over `reqwest::Client` with the backend's conventions baked
/// in: base URL joining, bearer auth as a default header, a per-request
/// `X-Request-Id`, and decoding of the `{message, errors}` error body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.access_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::ConfigError("access token contains characters not valid in a header".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        } else {
            log::warn!("No access token configured; requests will be unauthenticated.");
        }

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub(crate) async fn get_json<T>(&self, endpoint: Endpoint, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        log::debug!("GET {} [{}]", endpoint.path(), request_id);

        let response = self
            .http
            .get(self.url(&endpoint))
            .header("X-Request-Id", request_id.to_string())
            .query(query)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        log::debug!("POST {} [{}]", endpoint.path(), request_id);

        let response = self
            .http
            .post(self.url(&endpoint))
            .header("X-Request-Id", request_id.to_string())
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        log::debug!("PUT {} [{}]", endpoint.path(), request_id);

        let response = self
            .http
            .put(self.url(&endpoint))
            .header("X-Request-Id", request_id.to_string())
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // Error bodies are best-effort: a proxy may answer with HTML.
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        log::warn!("API rejection: status {}, message {:?}", status, body.message);

        Err(Error::ApiRejection {
            status: status.as_u16(),
            body,
        })
    }
}
