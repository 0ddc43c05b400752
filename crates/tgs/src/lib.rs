//! Stateless Telegram Bot API calls.
//!
//! Each function is one independent POST to `https://api.telegram.org/bot<token>/<method>`.
//! Nothing is retried, cached or remembered between calls. Failures come back as
//! values and faults are logged through `tracing`.
//!
//! ```no_run
//! # async fn demo() {
//! use tgs::{send_telegram_message, ParseMode};
//!
//! match send_telegram_message("123:abc", 12345, "Hello, World!", ParseMode::Markdown, None).await {
//!     Ok(id) => println!("sent as {}", id.0),
//!     Err(e) => println!("not sent: {e}"),
//! }
//! # }
//! ```

use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
};

use tgs_core::ports::{Diagnostics, TracingDiagnostics};
use tgs_http::ReqwestTransport;

pub use serde_json;
pub use tgs_core::{
    config::ApiConfig,
    domain::{BotToken, ChatId, Extra, MessageId, Method, ParseMode},
    errors::{Error, Failure, Result},
    logging,
    ports::{ApiRequest, ApiResponse, Transport},
    Dispatcher,
};

/// Dispatcher over `reqwest` for a given API server.
pub fn dispatcher(config: ApiConfig) -> Result<Dispatcher<ReqwestTransport>> {
    let transport = ReqwestTransport::new(&config)?;
    Ok(Dispatcher::new(transport, config))
}

/// Connection pool shared by the free functions. Holds no per-call state.
static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn shared_client() -> Result<reqwest::Client> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client.clone());
    }
    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| Error::Transport(format!("http client build error: {e}")))?;
    Ok(SHARED_CLIENT.get_or_init(|| client).clone())
}

fn default_dispatcher(operation: &str) -> Result<Dispatcher<ReqwestTransport>> {
    shared_client()
        .map(|client| {
            Dispatcher::new(ReqwestTransport::from_client(client), ApiConfig::default())
        })
        .map_err(|e| {
            TracingDiagnostics.fault(operation, &e);
            e
        })
}

/// Send `text` to `recipient_id`; returns the new message's id.
///
/// Keys in `options` are merged into the request body and win over
/// `chat_id`, `parse_mode` and `text`.
pub async fn send_telegram_message(
    token: &str,
    recipient_id: i64,
    text: &str,
    mode: ParseMode,
    options: Option<Extra>,
) -> std::result::Result<MessageId, Failure> {
    default_dispatcher(Method::SendMessage.as_str())?
        .send_message(&BotToken::new(token), ChatId(recipient_id), text, mode, options)
        .await
}

/// Upload the file at `path` as a document, named `file_name` or the file's base name.
pub async fn send_telegram_document(
    token: &str,
    recipient_id: i64,
    path: impl Into<PathBuf>,
    file_name: Option<String>,
) -> std::result::Result<(), Failure> {
    default_dispatcher(Method::SendDocument.as_str())?
        .send_document(&BotToken::new(token), ChatId(recipient_id), path, file_name)
        .await
}

/// Delete `message_id` from `recipient_id`'s chat.
///
/// Success means the server answered 2xx; whether the message existed is not checked.
pub async fn delete_telegram_message(
    token: &str,
    recipient_id: i64,
    message_id: i64,
) -> std::result::Result<(), Failure> {
    default_dispatcher(Method::DeleteMessage.as_str())?
        .delete_message(&BotToken::new(token), ChatId(recipient_id), MessageId(message_id))
        .await
}

/// Call any Bot API method with `content` as its JSON body.
///
/// `Ok(true)` when acknowledged, `Ok(false)` when answered without
/// acknowledgment, `Err` when the outcome is unknown.
pub async fn do_telegram_api_action(token: &str, action: &str, content: Extra) -> Result<bool> {
    default_dispatcher(action)?
        .do_action(&BotToken::new(token), action, content)
        .await
}

/// Same as [`dispatcher`] with a custom diagnostics hook.
pub fn dispatcher_with_diagnostics(
    config: ApiConfig,
    diagnostics: Arc<dyn Diagnostics>,
) -> Result<Dispatcher<ReqwestTransport>> {
    Ok(dispatcher(config)?.with_diagnostics(diagnostics))
}
