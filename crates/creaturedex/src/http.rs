use async_trait::async_trait;
use creaturedex_core::http::{is_success, join_url, ApiResponse, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Raw answer from the wire, before any decoding
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// `None` when the server answered but the body could not be read
    pub body: Option<String>,
}

/// A request the transport could not complete (no HTTP answer)
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Outgoing request handed to a [`Transport`]
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// Sends requests over the wire
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        let builder = match request.body {
            // `json` also sets `Content-Type: application/json`
            Some(body) => builder.json(&body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                log::warn!("Failed to read {status} response body: {e}");
                None
            }
        };

        Ok(RawResponse { status, body })
    }
}

/// HTTP client bound to one upstream base URL
///
/// Never fails: every outcome is reported through [`ApiResponse`].
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.into();
        if base_url.is_empty() {
            log::error!("API URL not configured");
        }

        Self {
            base_url,
            transport,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::Get, endpoint, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResponse<T> {
        self.request(Method::Post, endpoint, encode_body(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResponse<T> {
        self.request(Method::Put, endpoint, encode_body(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::Delete, endpoint, None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResponse<T> {
        let url = join_url(&self.base_url, endpoint);
        log::debug!("{method} {url}");

        let request = Request {
            method,
            url,
            body: body.filter(|_| method.has_body()),
        };

        match self.transport.send(request).await {
            Ok(raw) => decode(raw),
            Err(e) => {
                log::warn!("{method} {endpoint} failed: {e}");
                ApiResponse::network_error(&e.0)
            }
        }
    }
}

fn encode_body<B: Serialize>(body: Option<&B>) -> Option<serde_json::Value> {
    body.and_then(|b| serde_json::to_value(b).ok())
}

fn decode<T: DeserializeOwned>(raw: RawResponse) -> ApiResponse<T> {
    if !is_success(raw.status) {
        return ApiResponse::http_error(raw.status);
    }

    let Some(body) = raw.body else {
        return ApiResponse::unparseable(raw.status);
    };

    match serde_json::from_str::<T>(&body) {
        Ok(data) => ApiResponse::success(raw.status, data),
        Err(e) => {
            log::warn!("Failed to parse response body: {e}");
            ApiResponse::unparseable(raw.status)
        }
    }
}

/// Build the production transport
pub fn default_transport() -> Arc<dyn Transport> {
    Arc::new(ReqwestTransport::default())
}
