use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::types::{Payload, RenderKind};

/// Body of a `POST /api/chat` response, as it arrives on the wire.
///
/// `message` is mandatory; a body without it fails to deserialize.  The type
/// is kept as a raw string so that unknown kinds degrade to plain text instead
/// of failing the whole reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Caption or full reply text.
    pub message: String,

    /// Declared render kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Payload matching `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ChatResponse {
    /// Creates a plain-text response.
    pub fn plain(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            data: None,
        }
    }

    /// Creates a response with a declared kind and payload.
    pub fn typed(message: impl Into<String>, kind: RenderKind, data: Value) -> Self {
        Self {
            message: message.into(),
            kind: Some(kind.to_string()),
            data: Some(data),
        }
    }

    /// Decodes the wire body into a typed [`Reply`].
    ///
    /// An unrecognized `type` yields a kind-less reply.  A payload that does
    /// not fit its declared kind is an error.
    pub fn into_reply(self) -> Result<Reply> {
        let kind = self.kind.as_deref().and_then(|s| s.parse::<RenderKind>().ok());
        let payload = match (kind, self.data) {
            (Some(kind), Some(data)) if kind.has_payload() => Payload::decode(kind, data)?,
            _ => None,
        };
        Ok(Reply {
            text: self.message,
            kind,
            payload,
        })
    }
}

/// A decoded assistant reply, ready to become a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Caption or full text.
    pub text: String,
    /// Declared render kind, if recognized.
    pub kind: Option<RenderKind>,
    /// Payload agreeing with `kind`, if any.
    pub payload: Option<Payload>,
}

impl Reply {
    /// A reply with text only and no render kind.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
            payload: None,
        }
    }
}
