//! The seam between the conversation controller and the chat backend.
//!
//! [`Transport`] is the only thing the controller knows about the backend.
//! [`ChatClient`](crate::ChatClient) implements it over HTTP; tests and
//! alternative front ends can supply their own.

use std::sync::Arc;

use crate::error::Result;
use crate::types::{ChatRequest, ChatResponse};

/// One request/response exchange with the chat backend.
///
/// Implementations resolve to exactly one of a decoded response or an error.
/// There is no streaming and no partial response.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and waits for the complete response.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        (**self).chat(request).await
    }
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        (**self).chat(request).await
    }
}
