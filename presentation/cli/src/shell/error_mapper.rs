use business::domain::analysis::errors::CompletionError;

use crate::config::baseten_config::{API_KEY_VAR, ConfigError};

/// Renders a failure as the text shown on the console.
pub trait IntoConsoleMessage {
    fn into_console_message(self) -> String;
}

impl IntoConsoleMessage for CompletionError {
    fn into_console_message(self) -> String {
        format!("❌ {}", self)
    }
}

impl IntoConsoleMessage for ConfigError {
    fn into_console_message(self) -> String {
        format!(
            "❌ Setup Error: {}\nPlease make sure your {} environment variable is set.",
            self, API_KEY_VAR
        )
    }
}

impl IntoConsoleMessage for anyhow::Error {
    fn into_console_message(self) -> String {
        format!("❌ Error: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefix_remote_errors_with_api_error() {
        let message = CompletionError::remote(500, "server overloaded").into_console_message();
        assert_eq!(message, "❌ API Error: server overloaded");
    }

    #[test]
    fn should_prefix_transport_errors() {
        let message = CompletionError::transport("connection refused").into_console_message();
        assert_eq!(message, "❌ Error: connection refused");
    }

    #[test]
    fn should_explain_missing_api_key() {
        let message = ConfigError::MissingApiKey.into_console_message();
        assert!(message.starts_with("❌ Setup Error: BASETEN_API_KEY environment variable not set"));
        assert!(message.contains("Please make sure your BASETEN_API_KEY"));
    }

    #[test]
    fn should_render_unexpected_errors_generically() {
        let message = anyhow::anyhow!("stdin closed").into_console_message();
        assert_eq!(message, "❌ Error: stdin closed");
    }
}
