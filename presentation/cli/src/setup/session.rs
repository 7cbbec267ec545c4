use std::io::{BufRead, Write};

use crate::config::app_config::AppConfig;
use crate::config::baseten_config::ConfigError;
use crate::setup::dependency_injection::DependencyContainer;
use crate::shell::error_mapper::IntoConsoleMessage;
use crate::shell::interactive::Shell;
use crate::shell::text;

pub struct Session;

impl Session {
    /// Runs exactly one analysis. A configuration error is reported and ends
    /// the session before any client is built.
    pub async fn run<R: BufRead, W: Write>(
        config: Result<AppConfig, ConfigError>,
        input: R,
        out: &mut W,
    ) -> anyhow::Result<()> {
        text::write_banner(out)?;

        let config = match config {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Configuration error");
                writeln!(out, "{}", e.into_console_message())?;
                return Ok(());
            }
        };

        let container = DependencyContainer::new(config);
        Shell::new(container.run_analysis).run(input, out).await
    }
}
