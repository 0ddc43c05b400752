//! `reqwest` adapter for the `tgs-core` transport port.
//!
//! Every HTTP response, whatever its status, is handed back to the dispatcher;
//! only failures to obtain one become errors.

use async_trait::async_trait;

use tgs_core::{
    config::ApiConfig,
    errors::Error,
    ports::{ApiRequest, ApiResponse, MultipartForm, RequestBody, Transport},
    Result,
};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Transport(format!("http client build error: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an existing client (shared connection pool, custom TLS, proxies).
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn form(form: MultipartForm) -> reqwest::multipart::Form {
        let mut out = reqwest::multipart::Form::new();
        for (name, value) in form.fields {
            out = out.text(name, value);
        }
        let part = reqwest::multipart::Part::bytes(form.file.bytes).file_name(form.file.file_name);
        out.part(form.file.field, part)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: ApiRequest) -> Result<ApiResponse> {
        let req = self.http.post(&request.url);
        let req = match request.body {
            RequestBody::Json(body) => req.json(&body),
            RequestBody::Multipart(form) => req.multipart(Self::form(form)),
        };

        // Error text from reqwest embeds the URL, which carries the token.
        let resp = req
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request error: {}", e.without_url())))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::Transport(format!("response read error: {}", e.without_url())))?;
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);

        tracing::debug!(status, "telegram response received");
        Ok(ApiResponse { status, body })
    }
}
