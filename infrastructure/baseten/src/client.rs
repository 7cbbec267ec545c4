use business::domain::shared::value_objects::ApiKey;
use reqwest::Client;

/// Public inference endpoint, OpenAI-compatible.
pub const DEFAULT_BASE_URL: &str = "https://inference.baseten.co/v1";

/// Shared Baseten HTTP client configuration.
pub struct BasetenClient {
    pub client: Client,
    api_key: ApiKey,
    pub base_url: String,
}

impl BasetenClient {
    /// Timeouts are left at the reqwest defaults.
    pub fn new(api_key: ApiKey) -> Self {
        let client = Client::builder().build().unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at another OpenAI-compatible host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Api-Key {}", self.api_key.expose())
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl std::fmt::Debug for BasetenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasetenClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}
