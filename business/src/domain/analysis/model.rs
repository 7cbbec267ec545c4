use serde::Serialize;

use crate::domain::shared::value_objects::Industry;

use super::prompts::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, MODEL, SYSTEM_INSTRUCTION};

/// Analysis template selected from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Enterprise competitive analysis against the hyperscalers.
    CompetitiveAnalysis,
    /// Pain points for enterprises scaling AI workloads.
    PainPoints,
}

impl AnalysisMode {
    /// Response length cap requested for this mode.
    pub fn max_tokens(&self) -> u32 {
        match self {
            AnalysisMode::CompetitiveAnalysis => 1200,
            AnalysisMode::PainPoints => 1000,
        }
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisMode::CompetitiveAnalysis => write!(f, "competitive_analysis"),
            AnalysisMode::PainPoints => write!(f, "pain_points"),
        }
    }
}

impl std::str::FromStr for AnalysisMode {
    type Err = String;

    /// Parses a menu choice ("1" or "2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(AnalysisMode::CompetitiveAnalysis),
            "2" => Ok(AnalysisMode::PainPoints),
            other => Err(format!("Invalid menu choice: {}", other)),
        }
    }
}

/// One analysis to run: the mode plus an optional industry focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub mode: AnalysisMode,
    pub industry: Option<Industry>,
}

impl AnalysisRequest {
    pub fn competitive_analysis() -> Self {
        Self {
            mode: AnalysisMode::CompetitiveAnalysis,
            industry: None,
        }
    }

    /// Blank industry input is dropped.
    pub fn pain_points(industry: &str) -> Self {
        Self {
            mode: AnalysisMode::PainPoints,
            industry: Industry::parse(industry),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Body of a chat-completion call. Serializes to the wire format directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// Wraps a user prompt with the fixed model and system instruction.
    pub fn new(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: prompt.into(),
                },
            ],
            max_tokens,
            temperature,
        }
    }

    /// Request with the default length cap and temperature.
    pub fn with_defaults(prompt: impl Into<String>) -> Self {
        Self::new(prompt, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE)
    }

    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
    }
}

/// Text generated by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_menu_choices() {
        assert_eq!(
            "1".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::CompetitiveAnalysis
        );
        assert_eq!(" 2 ".parse::<AnalysisMode>().unwrap(), AnalysisMode::PainPoints);
    }

    #[test]
    fn should_reject_unknown_menu_choice() {
        assert!("9".parse::<AnalysisMode>().is_err());
        assert!("".parse::<AnalysisMode>().is_err());
        assert!("one".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn should_cap_tokens_per_mode() {
        assert_eq!(AnalysisMode::CompetitiveAnalysis.max_tokens(), 1200);
        assert_eq!(AnalysisMode::PainPoints.max_tokens(), 1000);
    }

    #[test]
    fn should_drop_blank_industry_for_pain_points() {
        let request = AnalysisRequest::pain_points("   ");
        assert_eq!(request.mode, AnalysisMode::PainPoints);
        assert!(request.industry.is_none());
    }

    #[test]
    fn should_keep_trimmed_industry_for_pain_points() {
        let request = AnalysisRequest::pain_points(" healthcare ");
        assert_eq!(request.industry.unwrap().as_str(), "healthcare");
    }

    #[test]
    fn should_serialize_completion_request_to_wire_format() {
        let request = CompletionRequest::new("Analyze this", 1000, 0.7);

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], json!(MODEL));
        assert_eq!(body["max_tokens"], json!(1000));
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], json!("system"));
        assert_eq!(body["messages"][0]["content"], json!(SYSTEM_INSTRUCTION));
        assert_eq!(body["messages"][1]["role"], json!("user"));
        assert_eq!(body["messages"][1]["content"], json!("Analyze this"));
        assert_eq!(body.as_object().unwrap().len(), 4);
    }

    #[test]
    fn should_use_defaults_when_not_specified() {
        let request = CompletionRequest::with_defaults("hello");
        assert_eq!(request.max_tokens, 800);
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.user_prompt(), Some("hello"));
    }
}
