use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analysis::errors::CompletionError;
use crate::domain::analysis::model::{Completion, CompletionRequest};
use crate::domain::analysis::prompts::{DEFAULT_TEMPERATURE, build_prompt};
use crate::domain::analysis::services::CompletionService;
use crate::domain::analysis::use_cases::run::{RunAnalysisParams, RunAnalysisUseCase};
use crate::domain::logger::Logger;

pub struct RunAnalysisUseCaseImpl {
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RunAnalysisUseCase for RunAnalysisUseCaseImpl {
    async fn execute(&self, params: RunAnalysisParams) -> Result<Completion, CompletionError> {
        let mode = params.request.mode;
        self.logger.info(&format!(
            "Running {} analysis (industry: {})",
            mode,
            params
                .request
                .industry
                .as_ref()
                .map(|i| i.as_str())
                .unwrap_or("none")
        ));

        let prompt = build_prompt(&params.request);
        let request = CompletionRequest::new(prompt, mode.max_tokens(), DEFAULT_TEMPERATURE);

        match self.completion.complete(&request).await {
            Ok(completion) => {
                self.logger.info(&format!(
                    "Analysis {} completed with {} characters",
                    mode,
                    completion.text.len()
                ));
                Ok(completion)
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Analysis {} failed: {:?}", mode, e));
                Err(e)
            }
        }
    }
}
