use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_EXPECTED_DIRECTORIES, DEFAULT_SERVER_NAME};
use crate::errors::ConfigCheckResult;
use crate::utils::path::{default_config_path, expand_home};

/// MCP Config Check
///
/// Reports whether the filesystem server entry of an MCP client
/// configuration exposes the expected directories.
///
/// ## Usage
/// ```bash
/// mcp-config-check                       # inspects ~/.claude.json
/// mcp-config-check ./client.json --expect /srv/data --expect /srv/logs
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity on stderr (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-config-check")]
#[command(about = "Check the filesystem MCP server entry of a client configuration")]
#[command(version)]
#[command(
    long_about = "Reads an MCP client configuration, prints the filesystem server entry \nand reports whether its args list every expected directory. The file is never modified."
)]
pub struct Cli {
    /// Configuration file to inspect.
    ///
    /// Defaults to `.claude.json` in the home directory. A leading `~` is expanded.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Entry under `mcpServers` to inspect
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SERVER_NAME)]
    pub server: String,

    /// Directory that must appear in the entry's args (repeatable)
    #[arg(
        long = "expect",
        value_name = "DIRECTORY",
        default_values = DEFAULT_EXPECTED_DIRECTORIES
    )]
    pub expected_directories: Vec<String>,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> ConfigCheckResult<Config> {
        Self::parse().into_config()
    }

    /// Resolve the config path and build the run configuration
    pub fn into_config(self) -> ConfigCheckResult<Config> {
        let config_path = match self.config {
            Some(path) => expand_home(&path),
            None => default_config_path()?,
        };
        Ok(Config::new(
            config_path,
            self.server,
            self.expected_directories,
        ))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mcp-config-check"]).unwrap();

        assert!(cli.config.is_none());
        assert_eq!(cli.server, "filesystem");
        assert_eq!(cli.expected_directories, DEFAULT_EXPECTED_DIRECTORIES);
    }

    #[test]
    fn test_explicit_path_and_expectations() {
        let cli = Cli::try_parse_from([
            "mcp-config-check",
            "/tmp/client.json",
            "--server",
            "workspace",
            "--expect",
            "/srv/a",
            "--expect",
            "/srv/b",
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.config_path(), &PathBuf::from("/tmp/client.json"));
        assert_eq!(config.server_name(), "workspace");
        assert_eq!(config.expected_directories(), &["/srv/a", "/srv/b"]);
    }

    #[test]
    fn test_default_path_is_in_home() {
        let cli = Cli::try_parse_from(["mcp-config-check"]).unwrap();

        if let Some(home) = dirs::home_dir() {
            let config = cli.into_config().unwrap();
            assert_eq!(config.config_path(), &home.join(".claude.json"));
        }
    }

    #[test]
    fn test_tilde_path_is_expanded() {
        let cli = Cli::try_parse_from(["mcp-config-check", "~/alt.json"]).unwrap();

        if let Some(home) = dirs::home_dir() {
            let config = cli.into_config().unwrap();
            assert_eq!(config.config_path(), &home.join("alt.json"));
        }
    }
}
