//! Integration tests for the bizchat library.
//! The live tests require a running backend named by `BIZCHAT_LIVE_URL`.

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use bizchat::chat::{APOLOGY, ChatSession, Phase, QUICK_ACTIONS};
    use bizchat::{
        Action, Block, ChatClient, ChatRequest, ChatResponse, Error, RenderKind, Result,
        Transport, render_message,
    };

    /// Replays canned wire responses and records every request.
    struct Backend {
        replies: Mutex<VecDeque<Result<ChatResponse>>>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl Backend {
        fn new(replies: Vec<Result<ChatResponse>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<ChatRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for Backend {
        async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
            self.seen.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::connection("script exhausted", None)))
        }
    }

    fn wire(body: serde_json::Value) -> Result<ChatResponse> {
        Ok(serde_json::from_value(body).unwrap())
    }

    #[tokio::test]
    async fn test_name_suggestion_to_logo_flow() {
        let backend = Backend::new(vec![
            wire(json!({
                "message": "Here are some names:",
                "type": "names",
                "data": ["Bean & Co.", "Daily Grind"]
            })),
            wire(json!({
                "message": "Use this prompt:",
                "type": "logoPrompt",
                "data": "A warm minimalist coffee bean mark for 'Bean & Co.'"
            })),
        ]);
        let mut session = ChatSession::new(backend);
        session.set_business_context("coffee shop");

        let reply = session
            .submit_quick_action(&QUICK_ACTIONS[1])
            .await
            .unwrap()
            .unwrap();
        let block = render_message(reply);
        assert!(block.is_actionable());
        assert_eq!(block.selectable().len(), 2);

        let action = session.latest_actions()[0].clone();
        assert_eq!(action, Action::SelectName("Bean & Co.".to_string()));
        let reply = session.dispatch(&action).await.unwrap().unwrap();
        assert_eq!(reply.kind(), Some(RenderKind::LogoPrompt));
        assert!(matches!(
            render_message(reply),
            Block::Preformatted { ref body, .. } if body.contains("Bean & Co.")
        ));

        let seen = session.transport().seen();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].message, "Suggest names for my business");
        assert_eq!(seen[0].business_name, "");
        assert_eq!(
            seen[1].message,
            "I like the name \"Bean & Co.\". Can you create a logo for it?"
        );
        assert_eq!(seen[1].business_name, "Bean & Co.");
        assert_eq!(seen[1].business_idea, "coffee shop");
        assert_eq!(session.conversation().history().len(), 4);
        assert_eq!(session.conversation().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_failures_become_apologies() {
        let backend = Backend::new(vec![
            Err(Error::api(500, "internal error")),
            wire(json!({"message": "Steps:", "type": "steps", "data": {"oops": true}})),
            wire(json!({"message": "Hmm", "type": "haiku", "data": null})),
        ]);
        let mut session = ChatSession::new(backend);

        for prompt in ["first", "second"] {
            let reply = session.submit_free_text(prompt).await.unwrap().unwrap();
            assert_eq!(reply.text(), APOLOGY);
            assert!(reply.payload().is_none());
        }

        let reply = session.submit_free_text("third").await.unwrap().unwrap();
        assert_eq!(reply.text(), "Hmm");
        assert_eq!(
            render_message(reply),
            Block::Text {
                text: "Hmm".to_string()
            }
        );

        let history = session.conversation().history();
        assert_eq!(history.len(), 6);
        for pair in history.chunks(2) {
            assert!(pair[0].is_user());
            assert!(!pair[1].is_user());
            assert!(pair[0].id() < pair[1].id());
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_apology() {
        let client = ChatClient::new(Some("http://127.0.0.1:9".to_string())).unwrap();
        let mut session = ChatSession::new(client);
        let reply = session
            .submit_free_text("Give me innovative ideas")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply.text(), APOLOGY);
        assert!(!session.conversation().is_pending());
    }

    #[tokio::test]
    async fn test_live_health_and_chat() {
        let Ok(base_url) = std::env::var("BIZCHAT_LIVE_URL") else {
            eprintln!("Skipping test: BIZCHAT_LIVE_URL not set");
            return;
        };

        let client = ChatClient::new(Some(base_url)).expect("Failed to create client");
        let health = client.health().await.expect("health check should succeed");
        assert!(health.is_healthy(), "backend reported {}", health.status);

        let mut session = ChatSession::new(client);
        session.set_business_context("coffee shop");
        let reply = session
            .submit_quick_action(&QUICK_ACTIONS[0])
            .await
            .expect("session should be idle")
            .expect("submission should not be ignored");
        assert!(!reply.text().is_empty());
    }
}
