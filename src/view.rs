//! Projection of conversation turns into presentational blocks.
//!
//! [`render_message`] is a pure function: it reads a [`Message`] and returns a
//! [`Block`] describing what to draw.  It never performs an interaction.
//! Blocks that can be acted upon carry [`SelectableItem`]s whose [`Action`]
//! the controller interprets (see `ChatSession::dispatch`).

use crate::types::{Message, Payload, RenderKind};

/// An intent a rendered item can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Accept a suggested business name.
    SelectName(String),
}

/// A rendered item the user can pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    /// Text shown on the item.
    pub label: String,
    /// Intent triggered when the item is picked.
    pub action: Action,
}

/// What to draw for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Text drawn verbatim, line breaks preserved.
    Text {
        /// The full text.
        text: String,
    },

    /// A heading followed by a numbered list.
    Steps {
        /// Heading line.
        heading: String,
        /// Steps in original order.
        items: Vec<String>,
    },

    /// A caption followed by selectable cards.
    Choices {
        /// Caption above the cards.
        caption: String,
        /// Cards in original order.
        items: Vec<SelectableItem>,
    },

    /// A caption followed by a fixed-width block that must not be reflowed.
    Preformatted {
        /// Caption above the block.
        caption: String,
        /// Content of the block.
        body: String,
    },

    /// A caption, then a label, then body text.
    Post {
        /// Caption above the post.
        caption: String,
        /// Format label of the post.
        label: String,
        /// Body of the post.
        body: String,
    },

    /// A caption followed by passive cards.
    Cards {
        /// Caption above the cards.
        caption: String,
        /// Cards in original order.
        cards: Vec<String>,
    },
}

impl Block {
    /// The caption (or full text) of the block.
    pub fn caption(&self) -> &str {
        match self {
            Block::Text { text } => text,
            Block::Steps { heading, .. } => heading,
            Block::Choices { caption, .. }
            | Block::Preformatted { caption, .. }
            | Block::Post { caption, .. }
            | Block::Cards { caption, .. } => caption,
        }
    }

    /// The selectable items in the block, empty for passive blocks.
    pub fn selectable(&self) -> &[SelectableItem] {
        match self {
            Block::Choices { items, .. } => items,
            _ => &[],
        }
    }

    /// Returns true if the block offers at least one action.
    pub fn is_actionable(&self) -> bool {
        !self.selectable().is_empty()
    }
}

/// Projects a turn into the block that presents it.
///
/// User turns, plain replies, replies with an unknown or absent kind, and
/// replies whose payload is missing or empty all render as [`Block::Text`].
pub fn render_message(message: &Message) -> Block {
    let text = message.text().to_string();
    let payload = match message.payload() {
        Some(payload) if !payload.is_empty() => payload,
        _ => return Block::Text { text },
    };
    match (message.kind(), payload) {
        (Some(RenderKind::Steps), Payload::Steps(items)) => Block::Steps {
            heading: text,
            items: items.clone(),
        },
        (Some(RenderKind::Names), Payload::Names(names)) => Block::Choices {
            caption: text,
            items: names
                .iter()
                .map(|name| SelectableItem {
                    label: name.clone(),
                    action: Action::SelectName(name.clone()),
                })
                .collect(),
        },
        (Some(RenderKind::LogoPrompt), Payload::LogoPrompt(prompt)) => Block::Preformatted {
            caption: text,
            body: prompt.clone(),
        },
        (Some(RenderKind::SocialMedia), Payload::SocialMedia(post)) => Block::Post {
            caption: text,
            label: post.format.clone(),
            body: post.content.clone(),
        },
        (Some(RenderKind::Ideas), Payload::Ideas(ideas)) => Block::Cards {
            caption: text,
            cards: ideas.clone(),
        },
        _ => Block::Text { text },
    }
}
