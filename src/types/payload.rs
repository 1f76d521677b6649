use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::RenderKind;

/// A social-media post produced by the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    /// Label describing the post, e.g. "Professional LinkedIn Post".
    pub format: String,
    /// Body of the post.
    pub content: String,
}

/// Structured data attached to an assistant reply.
///
/// The variant always agrees with the reply's [`RenderKind`]; plain replies
/// carry no payload at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Ordered steps.
    Steps(Vec<String>),
    /// Candidate business names.
    Names(Vec<String>),
    /// A single logo prompt.
    LogoPrompt(String),
    /// A social-media post.
    SocialMedia(SocialPost),
    /// Idea cards.
    Ideas(Vec<String>),
}

impl Payload {
    /// Decodes the `data` field of a reply according to its declared kind.
    ///
    /// `null` decodes to `None` for every kind, as does any data attached to a
    /// plain reply.  Data whose shape contradicts the kind is an error.
    pub fn decode(kind: RenderKind, data: Value) -> Result<Option<Self>> {
        if data.is_null() {
            return Ok(None);
        }
        let payload = match kind {
            RenderKind::Plain => return Ok(None),
            RenderKind::Steps => Payload::Steps(decode_field(kind, data)?),
            RenderKind::Names => Payload::Names(decode_field(kind, data)?),
            RenderKind::LogoPrompt => Payload::LogoPrompt(decode_field(kind, data)?),
            RenderKind::SocialMedia => Payload::SocialMedia(decode_field(kind, data)?),
            RenderKind::Ideas => Payload::Ideas(decode_field(kind, data)?),
        };
        Ok(Some(payload))
    }

    /// The render kind this payload belongs to.
    pub fn kind(&self) -> RenderKind {
        match self {
            Payload::Steps(_) => RenderKind::Steps,
            Payload::Names(_) => RenderKind::Names,
            Payload::LogoPrompt(_) => RenderKind::LogoPrompt,
            Payload::SocialMedia(_) => RenderKind::SocialMedia,
            Payload::Ideas(_) => RenderKind::Ideas,
        }
    }

    /// Returns true if there is nothing to draw beyond the caption.
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Steps(items) | Payload::Names(items) | Payload::Ideas(items) => {
                items.is_empty()
            }
            Payload::LogoPrompt(prompt) => prompt.is_empty(),
            Payload::SocialMedia(post) => post.content.is_empty(),
        }
    }
}

fn decode_field<T: serde::de::DeserializeOwned>(kind: RenderKind, data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|err| {
        Error::serialization(
            format!("data does not match reply type {kind}: {err}"),
            Some(Box::new(err)),
        )
    })
}
