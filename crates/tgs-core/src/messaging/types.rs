use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    domain::{ChatId, Extra, MessageId, ParseMode},
    ports::{FilePart, MultipartForm},
    Result,
};

/// Text message for `sendMessage`.
#[derive(Clone, Debug)]
pub struct OutgoingMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub parse_mode: ParseMode,
    pub extra: Extra,
}

impl OutgoingMessage {
    pub fn new(chat_id: ChatId, text: impl Into<String>, parse_mode: ParseMode) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode,
            extra: Extra::new(),
        }
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }

    /// JSON body for the request.
    ///
    /// `extra` is applied last, so a caller key replaces a built-in one with the
    /// same name (`chat_id`, `parse_mode`, `text`).
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("chat_id".into(), Value::from(self.chat_id.0));
        body.insert("parse_mode".into(), Value::from(self.parse_mode.as_str()));
        body.insert("text".into(), Value::from(self.text));
        body.extend(self.extra);
        body
    }
}

/// Local file for `sendDocument`.
#[derive(Clone, Debug)]
pub struct OutgoingDocument {
    pub chat_id: ChatId,
    pub path: PathBuf,
    /// Attachment name shown to the recipient; defaults to the file's base name.
    pub file_name: Option<String>,
}

const FALLBACK_ATTACHMENT_NAME: &str = "document";

impl OutgoingDocument {
    pub fn new(chat_id: ChatId, path: impl Into<PathBuf>) -> Self {
        Self {
            chat_id,
            path: path.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Absolute path of the document, relative paths taken from the current
    /// working directory. Symlinks are left alone.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if self.path.is_absolute() {
            return Ok(self.path.clone());
        }
        Ok(std::env::current_dir()?.join(&self.path))
    }

    pub fn attachment_name(&self, resolved: &Path) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        resolved
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(FALLBACK_ATTACHMENT_NAME)
            .to_string()
    }

    pub fn into_form(self, file_name: String, bytes: Vec<u8>) -> MultipartForm {
        MultipartForm {
            fields: vec![("chat_id".to_string(), self.chat_id.0.to_string())],
            file: FilePart {
                field: "document".to_string(),
                file_name,
                bytes,
            },
        }
    }
}

/// Body of `deleteMessage`.
#[derive(Clone, Copy, Debug)]
pub struct DeleteRequest {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

impl DeleteRequest {
    pub fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("chat_id".into(), Value::from(self.chat_id.0));
        body.insert("message_id".into(), Value::from(self.message_id.0));
        body
    }
}

/// Envelope every Bot API response is wrapped in.
///
/// All fields are optional: a missing `ok` counts as "not acknowledged".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ResponseEnvelope {
    /// Lenient parse: anything that is not an object yields an empty envelope.
    pub fn from_body(body: &Value) -> Self {
        Self::deserialize(body).unwrap_or_default()
    }

    pub fn acknowledged(&self) -> bool {
        self.ok == Some(true)
    }

    pub fn message_id(&self) -> Option<MessageId> {
        self.result
            .as_ref()?
            .get("message_id")?
            .as_i64()
            .map(MessageId)
    }
}
