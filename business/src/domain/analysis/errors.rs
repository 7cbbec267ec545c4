/// Failure of a single chat-completion call.
/// Each variant renders as the diagnostic shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("Error: {0}")]
    Transport(String),
    #[error("API Error: {body}")]
    Remote { status: u16, body: String },
    #[error("Error: malformed response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    pub fn transport(message: impl Into<String>) -> Self {
        CompletionError::Transport(message.into())
    }
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        CompletionError::Remote {
            status,
            body: body.into(),
        }
    }
    pub fn malformed_response(message: impl Into<String>) -> Self {
        CompletionError::MalformedResponse(message.into())
    }
}
