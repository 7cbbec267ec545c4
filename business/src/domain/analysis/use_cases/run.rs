use async_trait::async_trait;

use crate::domain::analysis::errors::CompletionError;
use crate::domain::analysis::model::{AnalysisRequest, Completion};

pub struct RunAnalysisParams {
    pub request: AnalysisRequest,
}

#[async_trait]
pub trait RunAnalysisUseCase: Send + Sync {
    async fn execute(&self, params: RunAnalysisParams) -> Result<Completion, CompletionError>;
}
