//! Interaction controller.
//!
//! This module provides the `ChatSession` struct which turns user intents into
//! backend requests and folds the results back into the [`Conversation`].

use crate::chat::conversation::{Conversation, Phase, Ticket};
use crate::chat::quick::{QuickAction, name_follow_up};
use crate::client::ChatClient;
use crate::error::{Error, Result};
use crate::observability::{SESSION_REJECTED_BUSY, SESSION_SUBMISSIONS};
use crate::transport::Transport;
use crate::types::{ChatResponse, Message};
use crate::view::Action;

/// A chat session that owns the conversation and the transport.
///
/// Every intent takes `&mut self`, so at most one request is ever in flight
/// and turns are appended in submission order.
pub struct ChatSession<T: Transport = ChatClient> {
    transport: T,
    conversation: Conversation,
}

/// Snapshot of a session for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Number of turns in the history.
    pub message_count: usize,
    /// The business idea description.
    pub business_context: String,
    /// The accepted business name, if any.
    pub business_name: Option<String>,
    /// The current request phase.
    pub phase: Phase,
}

impl<T: Transport> ChatSession<T> {
    /// Creates a new session with an empty conversation.
    pub fn new(transport: T) -> Self {
        Self::with_conversation(transport, Conversation::new())
    }

    /// Creates a new session around an existing conversation.
    pub fn with_conversation(transport: T, conversation: Conversation) -> Self {
        Self {
            transport,
            conversation,
        }
    }

    /// The conversation state.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The transport used for requests.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces the business idea description.
    pub fn set_business_context(&mut self, context: impl Into<String>) {
        self.conversation.set_business_context(context);
    }

    /// Replaces the uncommitted free-text input.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.conversation.set_draft(draft);
    }

    /// Sends a free-text message and waits for the reply.
    ///
    /// Returns `Ok(None)` when the submission was blank and ignored, and the
    /// appended assistant turn otherwise.  Transport failures never surface
    /// here: they become the apology turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] if a request is already in
    /// flight.
    pub async fn submit_free_text(&mut self, text: &str) -> Result<Option<&Message>> {
        let Some(ticket) = self.conversation.begin(text)? else {
            return Ok(None);
        };
        SESSION_SUBMISSIONS.click();
        tracing::debug!(user_message = %ticket.user_message(), "dispatching chat request");

        let request = ticket.request().clone();
        let mut in_flight = InFlight::new(&mut self.conversation, ticket);
        let outcome = self.transport.chat(&request).await;
        in_flight.resolve(outcome);
        drop(in_flight);

        Ok(self.conversation.last())
    }

    /// Sends the current draft.
    pub async fn submit_draft(&mut self) -> Result<Option<&Message>> {
        let draft = self.conversation.draft().to_string();
        self.submit_free_text(&draft).await
    }

    /// Sends a canned prompt.
    pub async fn submit_quick_action(&mut self, action: &QuickAction) -> Result<Option<&Message>> {
        self.submit_free_text(action.prompt).await
    }

    /// Accepts a suggested business name and asks for a logo for it.
    ///
    /// The name is recorded before the request is built, so the request
    /// carries it.
    pub async fn select_suggested_name(&mut self, name: &str) -> Result<Option<&Message>> {
        if self.conversation.is_pending() {
            SESSION_REJECTED_BUSY.click();
            return Err(Error::busy());
        }
        self.conversation.accept_business_name(name);
        self.submit_free_text(&name_follow_up(name)).await
    }

    /// Performs the intent behind a rendered action.
    pub async fn dispatch(&mut self, action: &Action) -> Result<Option<&Message>> {
        match action {
            Action::SelectName(name) => self.select_suggested_name(name).await,
        }
    }

    /// Actions offered by the most recent assistant turn.
    pub fn latest_actions(&self) -> Vec<Action> {
        self.conversation.latest_actions()
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            message_count: self.conversation.history().len(),
            business_context: self.conversation.business_context().to_string(),
            business_name: self.conversation.business_name().map(str::to_string),
            phase: self.conversation.phase(),
        }
    }
}

/// Holds a ticket across the transport await.
///
/// If the owning future is dropped before the outcome arrives, the ticket is
/// abandoned: the user turn gets the apology and the conversation goes idle.
struct InFlight<'a> {
    conversation: &'a mut Conversation,
    ticket: Option<Ticket>,
}

impl<'a> InFlight<'a> {
    fn new(conversation: &'a mut Conversation, ticket: Ticket) -> Self {
        Self {
            conversation,
            ticket: Some(ticket),
        }
    }

    fn resolve(&mut self, outcome: Result<ChatResponse>) {
        if let Some(ticket) = self.ticket.take() {
            self.conversation.complete(ticket, outcome);
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.conversation.abandon(ticket);
        }
    }
}
