use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "sales_intel";

/// Forwards the domain `Logger` port to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_be_usable_as_shared_logger_port() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
        logger.debug("debug message");
    }
}
