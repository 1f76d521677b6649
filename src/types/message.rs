use std::fmt;

use time::OffsetDateTime;

use crate::types::{Payload, RenderKind, Reply};

/// Session-local identifier for one turn.
///
/// Identifiers are handed out by a counter, so two turns created in the same
/// instant still get distinct, ordered ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Creates a typed message identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the identifier that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who wrote a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    /// The person at the keyboard.
    User,
    /// The backend assistant, or a synthetic reply standing in for it.
    Assistant,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::User => write!(f, "user"),
            Author::Assistant => write!(f, "assistant"),
        }
    }
}

/// One turn in the conversation.
///
/// Fields are read-only once constructed.  Only [`Message::assistant`] accepts
/// a render kind and payload, so a user turn can never carry one.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: MessageId,
    author: Author,
    text: String,
    created_at: OffsetDateTime,
    kind: Option<RenderKind>,
    payload: Option<Payload>,
}

impl Message {
    /// Creates a user turn.
    pub fn user(id: MessageId, text: impl Into<String>, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            author: Author::User,
            text: text.into(),
            created_at,
            kind: None,
            payload: None,
        }
    }

    /// Creates an assistant turn from a decoded reply.
    pub fn assistant(id: MessageId, reply: Reply, created_at: OffsetDateTime) -> Self {
        let Reply {
            text,
            kind,
            payload,
        } = reply;
        Self {
            id,
            author: Author::Assistant,
            text,
            created_at,
            kind,
            payload,
        }
    }

    /// The turn's identifier.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Who wrote the turn.
    pub fn author(&self) -> Author {
        self.author
    }

    /// Returns true for user turns.
    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    /// The caption or full text of the turn.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the turn was appended.
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// The declared render kind, if any.
    pub fn kind(&self) -> Option<RenderKind> {
        self.kind
    }

    /// The structured payload, if any.
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }
}
