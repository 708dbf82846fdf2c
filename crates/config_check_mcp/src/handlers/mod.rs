use std::io::Write;

use crate::config::Config;
use crate::domain::{Inspection, Verdict, inspect, load_document};
use crate::errors::ConfigCheckResult;
use crate::report::Report;

/// Load, inspect and render; nothing is printed until the whole report is ready
pub fn check(config: &Config) -> ConfigCheckResult<String> {
    let path = config.config_path();
    tracing::info!(path = %path.display(), server = %config.server_name(), "checking MCP client configuration");

    let document = load_document(path)?;
    let inspection = inspect(
        &document,
        config.server_name(),
        config.expected_directories(),
    );

    match &inspection {
        Inspection::NoServers => tracing::debug!("no mcpServers section"),
        Inspection::ServerMissing => tracing::debug!("server entry not present"),
        Inspection::Found(report) => match &report.verdict {
            Verdict::Correct => tracing::info!("all expected directories present"),
            Verdict::NoArgs => tracing::warn!("server entry has no args"),
            Verdict::WrongDirectories { args } => {
                tracing::warn!(%args, "expected directories missing from args")
            }
        },
    }

    Report::new(
        &inspection,
        config.server_name(),
        config.expected_directories(),
    )
    .render()
}

pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let output = check(&config).inspect_err(|e| {
        tracing::error!("config check failed: {}", e);
    })?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
