use async_trait::async_trait;
use profiledesk_application::{ResourceRequest, ResourceTransport, TransportResponse};
use profiledesk_core::{AppError, AppResult};
use profiledesk_domain::HttpMethod;
use reqwest::header::{ACCEPT, HeaderValue};
use tracing::debug;
use url::Url;
use uuid::Uuid;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// reqwest-based transport for the profile REST backend.
#[derive(Clone)]
pub struct HttpResourceTransport {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpResourceTransport {
    /// Creates a transport issuing requests relative to `base_url`.
    pub fn new(http_client: reqwest::Client, base_url: Url) -> AppResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "backend base url '{base_url}' cannot carry resource paths"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Returns the absolute URL for `request`, percent-encoding each segment.
    pub fn resolve(&self, request: &ResourceRequest) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Internal(format!(
                    "backend base url '{}' cannot carry resource paths",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(request.path.segments());
        Ok(url)
    }
}

#[async_trait]
impl ResourceTransport for HttpResourceTransport {
    async fn send(&self, request: ResourceRequest) -> AppResult<TransportResponse> {
        let url = self.resolve(&request)?;
        let request_id = Uuid::new_v4();

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        };

        let mut builder = self
            .http_client
            .request(method, url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|error| {
            AppError::Internal(format!(
                "backend request {} {url} failed: {error}",
                request.method
            ))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|error| {
            AppError::Internal(format!(
                "backend response body for {} {url} unavailable: {error}",
                request.method
            ))
        })?;

        debug!(
            method = %request.method,
            %url,
            %request_id,
            status,
            "backend responded"
        );

        Ok(TransportResponse { status, body })
    }
}
