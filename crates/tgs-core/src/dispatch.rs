use std::{path::PathBuf, sync::Arc};

use crate::{
    config::ApiConfig,
    domain::{BotToken, ChatId, Extra, MessageId, Method, ParseMode},
    errors::{Error, Failure},
    messaging::types::{DeleteRequest, OutgoingDocument, OutgoingMessage, ResponseEnvelope},
    ports::{
        ApiRequest, ApiResponse, Diagnostics, MultipartForm, RequestBody, TracingDiagnostics,
        Transport,
    },
    Result,
};

/// Builds Bot API requests, sends them through a [`Transport`] and classifies the answer.
///
/// Holds only immutable wiring, so one dispatcher can serve any number of
/// concurrent calls. The token is passed per call and never kept.
pub struct Dispatcher<T> {
    transport: T,
    config: ApiConfig,
    diagnostics: Arc<dyn Diagnostics>,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn report(&self, method: &Method, error: Error) -> Error {
        self.diagnostics.fault(method.as_str(), &error);
        error
    }

    /// Issue one POST and hand the response to `classify`.
    ///
    /// A transport fault goes to the diagnostics hook once and comes back as `Err`;
    /// any HTTP response, whatever its status, goes to `classify`.
    pub async fn execute<R>(
        &self,
        token: &BotToken,
        method: Method,
        body: RequestBody,
        classify: impl FnOnce(&Method, ApiResponse) -> R,
    ) -> Result<R> {
        let url = self.config.method_url(token, &method);
        tracing::debug!(method = %method, "posting telegram request");
        match self.transport.post(ApiRequest { url, body }).await {
            Ok(resp) => Ok(classify(&method, resp)),
            Err(e) => Err(self.report(&method, e)),
        }
    }

    /// `sendMessage`. Returns the id Telegram assigned to the new message.
    ///
    /// `extra` is merged over the built-in fields. Every call is a new send:
    /// two identical calls produce two messages.
    pub async fn send_message(
        &self,
        token: &BotToken,
        chat_id: ChatId,
        text: &str,
        parse_mode: ParseMode,
        extra: Option<Extra>,
    ) -> std::result::Result<MessageId, Failure> {
        let msg = OutgoingMessage::new(chat_id, text, parse_mode)
            .with_extra(extra.unwrap_or_default());
        self.execute(
            token,
            Method::SendMessage,
            RequestBody::Json(msg.into_body()),
            classify_sent_message,
        )
        .await?
    }

    /// `sendDocument`. Reads the whole file into memory and uploads it as `document`.
    ///
    /// Only the transport outcome is checked: any 2xx counts as delivered, anything
    /// else is reported as a fault. The `ok` flag is not looked at.
    pub async fn send_document(
        &self,
        token: &BotToken,
        chat_id: ChatId,
        path: impl Into<PathBuf>,
        file_name: Option<String>,
    ) -> std::result::Result<(), Failure> {
        let method = Method::SendDocument;
        let mut doc = OutgoingDocument::new(chat_id, path);
        doc.file_name = file_name;

        let form = match load_document(doc).await {
            Ok(form) => form,
            Err(e) => return Err(Failure::Fault(self.report(&method, e))),
        };

        self.execute(token, method.clone(), RequestBody::Multipart(form), classify_delivered)
            .await?
            .map_err(|e| Failure::Fault(self.report(&method, e)))
    }

    /// `deleteMessage`. Same success rule as [`Dispatcher::send_document`]: a non-2xx
    /// answer is a fault and goes to the diagnostics hook.
    pub async fn delete_message(
        &self,
        token: &BotToken,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> std::result::Result<(), Failure> {
        let body = DeleteRequest { chat_id, message_id }.into_body();
        let method = Method::DeleteMessage;
        self.execute(token, method.clone(), RequestBody::Json(body), classify_delivered)
            .await?
            .map_err(|e| Failure::Fault(self.report(&method, e)))
    }

    /// Call an arbitrary Bot API method with `content` as the JSON body.
    ///
    /// `Ok(true)`: 200 and `ok: true`. `Ok(false)`: a response that is anything
    /// else. `Err`: no response at all, outcome unknown.
    pub async fn do_action(
        &self,
        token: &BotToken,
        action: &str,
        content: Extra,
    ) -> Result<bool> {
        self.execute(
            token,
            Method::Custom(action.to_string()),
            RequestBody::Json(content),
            classify_acknowledged,
        )
        .await
    }
}

async fn load_document(doc: OutgoingDocument) -> Result<MultipartForm> {
    let path = doc.resolve_path()?;
    let file_name = doc.attachment_name(&path);
    let bytes = tokio::fs::read(&path).await.map_err(|e| Error::InvalidPath {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    Ok(doc.into_form(file_name, bytes))
}

fn classify_sent_message(
    method: &Method,
    resp: ApiResponse,
) -> std::result::Result<MessageId, Failure> {
    if resp.status != 200 {
        tracing::debug!(method = %method, status = resp.status, "telegram request rejected");
        return Err(Failure::Status(resp.status));
    }
    let env = ResponseEnvelope::from_body(&resp.body);
    if !env.acknowledged() {
        tracing::debug!(
            method = %method,
            description = ?env.description,
            "telegram request not acknowledged"
        );
        return Err(Failure::NotAcknowledged {
            error_code: env.error_code,
            description: env.description,
        });
    }
    env.message_id().ok_or(Failure::MissingResult)
}

/// Non-2xx counts as a failed POST here, not as an answer to interpret.
fn classify_delivered(_method: &Method, resp: ApiResponse) -> Result<()> {
    if (200..300).contains(&resp.status) {
        Ok(())
    } else {
        Err(Error::External(format!("http status {}", resp.status)))
    }
}

fn classify_acknowledged(method: &Method, resp: ApiResponse) -> bool {
    let ok = resp.status == 200 && ResponseEnvelope::from_body(&resp.body).acknowledged();
    if !ok {
        tracing::debug!(method = %method, status = resp.status, "telegram action not acknowledged");
    }
    ok
}
