use std::sync::Arc;

use logger::TracingLogger;

use baseten::chat_completion::ChatCompletionBaseten;
use baseten::client::BasetenClient;

use business::application::analysis::run::RunAnalysisUseCaseImpl;
use business::domain::analysis::use_cases::run::RunAnalysisUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub run_analysis: Arc<dyn RunAnalysisUseCase>,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client = BasetenClient::new(config.baseten.api_key).with_base_url(config.base_url);
        let completion = Arc::new(ChatCompletionBaseten::new(client));

        // Analysis use cases
        let run_analysis = Arc::new(RunAnalysisUseCaseImpl { completion, logger });

        Self { run_analysis }
    }
}
