//! Client side of a small-business assistant chat.
//!
//! The crate keeps an ordered conversation with an assistant backend, posts
//! each user turn over HTTP together with the business context, and turns the
//! typed replies (steps, names, logo prompts, social posts, ideas) into
//! renderable blocks.

// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod observability;
pub mod render;
pub mod transport;
pub mod types;
pub mod view;

// Re-exports
pub use client::ChatClient;
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use transport::Transport;
pub use types::*;
pub use view::{Action, Block, SelectableItem, render_message};
