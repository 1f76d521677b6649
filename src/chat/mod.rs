//! Conversation state and interaction control.
//!
//! This module provides the client-side half of the business assistant:
//!
//! - An append-only conversation with an explicit idle/awaiting state machine
//! - An interaction controller that serializes user intents into requests
//! - The canned quick-action prompts
//! - Slash commands and configuration for the `bizchat` REPL
//!
//! # Architecture
//!
//! - [`conversation`]: history, business context, and the request phase
//! - [`session`]: async controller driving the transport
//! - [`quick`]: quick actions and the name follow-up prompt
//! - [`commands`]: slash command parsing
//! - [`config`]: CLI argument parsing and configuration

mod commands;
mod config;
mod conversation;
mod quick;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use conversation::{APOLOGY, Conversation, Phase, Ticket};
pub use quick::{QUICK_ACTIONS, QuickAction, name_follow_up, quick_action};
pub use session::{ChatSession, SessionStats};
