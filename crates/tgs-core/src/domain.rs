use std::fmt;

use serde::{Deserialize, Serialize};

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

/// Bot token as issued by BotFather.
///
/// Opaque: the format is not checked, a bad token shows up as a rejection from
/// the service. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}

impl From<&str> for BotToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BotToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Text formatting applied by Telegram to outgoing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    Html,
    Markdown,
    MarkdownV2,
}

impl ParseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Html => "html",
            ParseMode::Markdown => "markdown",
            ParseMode::MarkdownV2 => "markdownv2",
        }
    }
}

/// Caller-supplied body fields merged over the built-in ones.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Bot API method addressed by a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Method {
    SendMessage,
    SendDocument,
    DeleteMessage,
    Custom(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::SendMessage => "sendMessage",
            Method::SendDocument => "sendDocument",
            Method::DeleteMessage => "deleteMessage",
            Method::Custom(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
