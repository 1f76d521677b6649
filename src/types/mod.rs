// Public modules
pub mod chat_request;
pub mod chat_response;
pub mod health_status;
pub mod message;
pub mod payload;
pub mod render_kind;

// Re-exports
pub use chat_request::ChatRequest;
pub use chat_response::{ChatResponse, Reply};
pub use health_status::HealthStatus;
pub use message::{Author, Message, MessageId};
pub use payload::{Payload, SocialPost};
pub use render_kind::{RenderKind, RenderKindParseError};
