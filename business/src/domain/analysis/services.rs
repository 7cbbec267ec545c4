use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::{Completion, CompletionRequest};

/// Service port for a remote chat-completion endpoint.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError>;
}
