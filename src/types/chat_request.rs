use serde::{Deserialize, Serialize};

/// Body of a `POST /api/chat` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The latest user utterance or quick-action label.
    pub message: String,

    /// Free-text description of the business idea.
    pub business_idea: String,

    /// The accepted business name, or an empty string when none was chosen.
    pub business_name: String,
}

impl ChatRequest {
    /// Creates a new request.  A missing business name is sent as `""`.
    pub fn new(
        message: impl Into<String>,
        business_idea: impl Into<String>,
        business_name: Option<&str>,
    ) -> Self {
        Self {
            message: message.into(),
            business_idea: business_idea.into(),
            business_name: business_name.unwrap_or_default().to_string(),
        }
    }
}
