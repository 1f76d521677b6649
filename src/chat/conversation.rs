//! Conversation state: the append-only history and the fields around it.
//!
//! [`Conversation`] is a synchronous state machine with two phases.  A
//! submission moves it from [`Phase::Idle`] to [`Phase::AwaitingResponse`] and
//! hands back a [`Ticket`]; completing the ticket appends the assistant turn
//! and returns it to idle.  The async controller in `session` drives these two
//! steps around the transport call.

use time::OffsetDateTime;

use crate::error::{Error, Result};
use crate::observability::{SESSION_FALLBACKS, SESSION_IGNORED, SESSION_REJECTED_BUSY};
use crate::types::{ChatRequest, ChatResponse, Message, MessageId, Reply};
use crate::view::{Action, render_message};

/// Text of the assistant turn appended when a request fails.
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Request lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No request in flight; submissions are accepted.
    Idle,
    /// A request is in flight; submissions are rejected.
    AwaitingResponse,
}

/// Proof that a submission was accepted.
///
/// Carries the outbound request.  Exactly one of [`Conversation::complete`] or
/// [`Conversation::abandon`] consumes it.
#[derive(Debug)]
#[must_use = "a ticket must be completed or the conversation stays busy"]
pub struct Ticket {
    request: ChatRequest,
    user_message: MessageId,
}

impl Ticket {
    /// The request to send to the backend.
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }

    /// The user turn this ticket answers.
    pub fn user_message(&self) -> MessageId {
        self.user_message
    }
}

/// The state of one conversation.
#[derive(Debug)]
pub struct Conversation {
    history: Vec<Message>,
    draft: String,
    business_context: String,
    business_name: Option<String>,
    phase: Phase,
    next_id: MessageId,
}

impl Conversation {
    /// Creates an empty, idle conversation.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            draft: String::new(),
            business_context: String::new(),
            business_name: None,
            phase: Phase::Idle,
            next_id: MessageId::new(0),
        }
    }

    /// Sets the initial business context.
    pub fn with_business_context(mut self, context: impl Into<String>) -> Self {
        self.business_context = context.into();
        self
    }

    /// All turns, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// The most recent turn.
    pub fn last(&self) -> Option<&Message> {
        self.history.last()
    }

    /// Returns true if no turn has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The uncommitted free-text input.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the uncommitted free-text input.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Free-text description of the business idea.
    pub fn business_context(&self) -> &str {
        &self.business_context
    }

    /// Replaces the business idea description.  Allowed in any phase.
    pub fn set_business_context(&mut self, context: impl Into<String>) {
        self.business_context = context.into();
    }

    /// The business name the user accepted, if any.
    pub fn business_name(&self) -> Option<&str> {
        self.business_name.as_deref()
    }

    pub(crate) fn accept_business_name(&mut self, name: impl Into<String>) {
        self.business_name = Some(name.into());
    }

    /// The current request phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    /// Accepts a submission.
    ///
    /// Returns `Ok(None)` without touching any state when both `text` and the
    /// business context are blank.  Otherwise appends the user turn, clears the
    /// draft, enters [`Phase::AwaitingResponse`] and returns the ticket whose
    /// request carries the current context and business name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] if a request is already in flight.
    pub fn begin(&mut self, text: &str) -> Result<Option<Ticket>> {
        if self.is_pending() {
            SESSION_REJECTED_BUSY.click();
            return Err(Error::busy());
        }
        if text.trim().is_empty() && self.business_context.trim().is_empty() {
            SESSION_IGNORED.click();
            return Ok(None);
        }
        let id = self.allocate_id();
        let created_at = self.timestamp();
        self.history.push(Message::user(id, text, created_at));
        self.draft.clear();
        self.phase = Phase::AwaitingResponse;
        let request = ChatRequest::new(
            text,
            self.business_context.clone(),
            self.business_name.as_deref(),
        );
        Ok(Some(Ticket {
            request,
            user_message: id,
        }))
    }

    /// Folds the outcome of a ticket's request into the history.
    ///
    /// A transport error or an undecodable response becomes the fixed
    /// [`APOLOGY`] turn.  The conversation is idle afterwards in every case.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<ChatResponse>) -> &Message {
        debug_assert_eq!(self.phase, Phase::AwaitingResponse);
        let reply = match outcome.and_then(ChatResponse::into_reply) {
            Ok(reply) => reply,
            Err(err) => {
                SESSION_FALLBACKS.click();
                tracing::warn!(
                    user_message = %ticket.user_message,
                    error = %err,
                    "chat request failed; showing apology"
                );
                Reply::text_only(APOLOGY)
            }
        };
        self.push_reply(reply)
    }

    /// Releases a ticket whose request will never resolve.
    ///
    /// The user turn is answered with the [`APOLOGY`] turn so every user turn
    /// keeps exactly one reply.
    pub fn abandon(&mut self, ticket: Ticket) -> &Message {
        debug_assert_eq!(self.phase, Phase::AwaitingResponse);
        SESSION_FALLBACKS.click();
        tracing::warn!(
            user_message = %ticket.user_message,
            "chat request abandoned; showing apology"
        );
        self.push_reply(Reply::text_only(APOLOGY))
    }

    fn push_reply(&mut self, reply: Reply) -> &Message {
        let id = self.allocate_id();
        let created_at = self.timestamp();
        self.history.push(Message::assistant(id, reply, created_at));
        self.phase = Phase::Idle;
        &self.history[self.history.len() - 1]
    }

    /// Actions offered by the most recent assistant turn.
    pub fn latest_actions(&self) -> Vec<Action> {
        self.history
            .iter()
            .rev()
            .find(|message| !message.is_user())
            .map(|message| {
                render_message(message)
                    .selectable()
                    .iter()
                    .map(|item| item.action.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn timestamp(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        match self.history.last() {
            Some(last) if last.created_at() > now => last.created_at(),
            _ => now,
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Author, RenderKind};
    use serde_json::json;

    #[test]
    fn new_conversation_is_idle_and_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.phase(), Phase::Idle);
        assert!(conversation.business_name().is_none());
        assert_eq!(conversation.draft(), "");
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut conversation = Conversation::new();
        conversation.set_draft("   ");
        assert!(conversation.begin("   ").unwrap().is_none());
        assert!(conversation.is_empty());
        assert!(!conversation.is_pending());
        assert_eq!(conversation.draft(), "   ");
    }

    #[test]
    fn blank_text_with_context_is_sent() {
        let mut conversation = Conversation::new().with_business_context("bakery");
        let ticket = conversation.begin("").unwrap().unwrap();
        assert_eq!(ticket.request().message, "");
        assert_eq!(ticket.request().business_idea, "bakery");
        assert_eq!(conversation.history().len(), 1);
    }

    #[test]
    fn begin_appends_user_turn_and_enters_awaiting() {
        let mut conversation = Conversation::new().with_business_context("coffee shop");
        conversation.set_draft("Give me steps");
        let ticket = conversation.begin("Give me steps").unwrap().unwrap();

        assert!(conversation.is_pending());
        assert_eq!(conversation.draft(), "");
        let last = conversation.last().unwrap();
        assert_eq!(last.author(), Author::User);
        assert_eq!(last.text(), "Give me steps");
        assert_eq!(last.id(), ticket.user_message());
        assert_eq!(
            ticket.request(),
            &ChatRequest::new("Give me steps", "coffee shop", None)
        );
    }

    #[test]
    fn begin_while_awaiting_is_rejected() {
        let mut conversation = Conversation::new();
        let ticket = conversation.begin("first").unwrap().unwrap();
        let err = conversation.begin("second").unwrap_err();
        assert!(err.is_busy());
        assert_eq!(conversation.history().len(), 1);

        conversation.complete(ticket, Ok(ChatResponse::plain("ok")));
        assert!(conversation.begin("second").unwrap().is_some());
    }

    #[test]
    fn complete_appends_reply_and_returns_to_idle() {
        let mut conversation = Conversation::new();
        let ticket = conversation.begin("Suggest names").unwrap().unwrap();
        let reply = conversation.complete(
            ticket,
            Ok(ChatResponse::typed(
                "Names:",
                RenderKind::Names,
                json!(["Bean & Co."]),
            )),
        );
        assert_eq!(reply.author(), Author::Assistant);
        assert_eq!(reply.kind(), Some(RenderKind::Names));
        assert!(!conversation.is_pending());
        assert_eq!(conversation.history().len(), 2);
        assert_eq!(
            conversation.latest_actions(),
            vec![Action::SelectName("Bean & Co.".to_string())]
        );
    }

    #[test]
    fn failed_outcome_becomes_apology() {
        let mut conversation = Conversation::new();
        let ticket = conversation.begin("hello").unwrap().unwrap();
        let reply = conversation.complete(ticket, Err(Error::connection("refused", None)));
        assert_eq!(reply.text(), APOLOGY);
        assert!(reply.kind().is_none());
        assert!(!conversation.is_pending());
    }

    #[test]
    fn malformed_payload_becomes_apology() {
        let mut conversation = Conversation::new();
        let ticket = conversation.begin("logo").unwrap().unwrap();
        let reply = conversation.complete(
            ticket,
            Ok(ChatResponse::typed("Logo", RenderKind::LogoPrompt, json!([1, 2]))),
        );
        assert_eq!(reply.text(), APOLOGY);
        assert!(reply.payload().is_none());
    }

    #[test]
    fn abandon_answers_with_apology() {
        let mut conversation = Conversation::new();
        let ticket = conversation.begin("hello").unwrap().unwrap();
        let reply = conversation.abandon(ticket);
        assert_eq!(reply.text(), APOLOGY);
        assert_eq!(reply.kind(), None);
        assert!(!conversation.is_pending());
        let history = conversation.history();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_user());
        assert!(!history[1].is_user());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn completing_on_an_idle_conversation_panics() {
        let mut busy = Conversation::new();
        let ticket = busy.begin("hello").unwrap().unwrap();
        let mut idle = Conversation::new();
        idle.complete(ticket, Ok(ChatResponse::plain("hi")));
    }

    #[test]
    fn ids_and_timestamps_are_ordered() {
        let mut conversation = Conversation::new();
        for text in ["one", "two", "three"] {
            let ticket = conversation.begin(text).unwrap().unwrap();
            conversation.complete(ticket, Ok(ChatResponse::plain(text)));
        }
        let history = conversation.history();
        assert_eq!(history.len(), 6);
        for pair in history.windows(2) {
            assert!(pair[0].id() < pair[1].id());
            assert!(pair[0].created_at() <= pair[1].created_at());
        }
    }

    #[test]
    fn request_carries_accepted_name() {
        let mut conversation = Conversation::new().with_business_context("coffee shop");
        conversation.accept_business_name("Bean & Co.");
        let ticket = conversation.begin("Create a logo").unwrap().unwrap();
        assert_eq!(ticket.request().business_name, "Bean & Co.");
    }

    #[test]
    fn latest_actions_skip_user_turns() {
        let mut conversation = Conversation::new();
        assert!(conversation.latest_actions().is_empty());
        let ticket = conversation.begin("names").unwrap().unwrap();
        conversation.complete(
            ticket,
            Ok(ChatResponse::typed("Names:", RenderKind::Names, json!(["A", "B"]))),
        );
        let _ticket = conversation.begin("thanks").unwrap().unwrap();
        assert_eq!(conversation.latest_actions().len(), 2);
    }
}
