use std::error::Error as _;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use business::domain::analysis::errors::CompletionError;
use business::domain::analysis::model::{Completion, CompletionRequest};
use business::domain::analysis::services::CompletionService;

use crate::client::BasetenClient;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct ChatCompletionBaseten {
    client: BasetenClient,
}

impl ChatCompletionBaseten {
    pub fn new(client: BasetenClient) -> Self {
        Self { client }
    }

    /// Flattens a reqwest error and its sources into one line.
    fn describe(error: &reqwest::Error) -> String {
        let mut description = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        description
    }

    fn parse_response(body: &str) -> Result<Completion, CompletionError> {
        let parsed: ChatCompletionResponse = serde_json::from_str(body)
            .map_err(|e| CompletionError::malformed_response(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(Completion::new)
            .ok_or_else(|| CompletionError::malformed_response("no choices[0].message.content"))
    }
}

#[async_trait]
impl CompletionService for ChatCompletionBaseten {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let description = Self::describe(&e);
                warn!(error = %description, "Chat completion request failed");
                CompletionError::transport(description)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::transport(Self::describe(&e)))?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Chat completion returned an error status");
            return Err(CompletionError::remote(status.as_u16(), body));
        }

        Self::parse_response(&body)
    }
}
