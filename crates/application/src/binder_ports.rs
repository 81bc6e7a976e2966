use async_trait::async_trait;
use serde_json::Value;

use profiledesk_core::AppResult;
use profiledesk_domain::{HttpMethod, ResourcePath};

/// One REST call issued by the binder.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Expanded resource path, relative to the backend base URL.
    pub path: ResourcePath,
    /// JSON body, absent for GET.
    pub body: Option<Value>,
}

/// Raw backend response; classification is left to the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl TransportResponse {
    /// Returns whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for sending resource requests to the REST backend.
///
/// Implementations return `Err` only when no HTTP response was received.
#[async_trait]
pub trait ResourceTransport: Send + Sync {
    /// Sends one request with JSON content negotiation.
    async fn send(&self, request: ResourceRequest) -> AppResult<TransportResponse>;
}
