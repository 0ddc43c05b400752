use async_trait::async_trait;

use crate::{errors::Error, Result};

/// One outgoing POST.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub url: String,
    pub body: RequestBody,
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    Json(serde_json::Map<String, serde_json::Value>),
    Multipart(MultipartForm),
}

/// `multipart/form-data` body: plain text fields plus one file part.
#[derive(Clone, Debug)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub file: FilePart,
}

#[derive(Clone, Debug)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Whatever the server answered, successful or not.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body, `Null` when the body was empty or not JSON.
    pub body: serde_json::Value,
}

/// Port for issuing HTTP requests.
///
/// Implementations return `Ok` for every HTTP response, including 4xx/5xx, and
/// `Err` only when no response was obtained. One call, one attempt: no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn post(&self, request: ApiRequest) -> Result<ApiResponse> {
        (**self).post(request).await
    }
}

/// Hook receiving every caught fault before it is turned into a return value.
pub trait Diagnostics: Send + Sync {
    fn fault(&self, operation: &str, error: &Error);
}

/// Default hook: one `tracing` error event per fault.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn fault(&self, operation: &str, error: &Error) {
        tracing::error!(operation, error = %error, "telegram request failed");
    }
}
