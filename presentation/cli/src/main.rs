use std::io::{self, Write};

use dotenvy::dotenv;

mod config;
mod setup;
mod shell;

use config::app_config::AppConfig;
use setup::session::Session;
use shell::error_mapper::IntoConsoleMessage;

/// CLI Entry Point
///
/// Loads configuration, wires dependencies and runs one interactive analysis.
/// - config/: Credential loading
/// - setup/: Dependency injection and session flow
/// - shell/: Console prompts and rendering
///
/// Every failure is printed; the process always exits normally.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Run the session
    let mut stdout = io::stdout();
    if let Err(e) = Session::run(config, io::stdin().lock(), &mut stdout).await {
        tracing::error!(error = %e, "Session failed");
        let _ = writeln!(stdout, "{}", e.into_console_message());
    }
}
