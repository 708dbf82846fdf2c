use std::path::PathBuf;

use derive_getters::Getters;

/// File name of the MCP client configuration, relative to the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".claude.json";

/// Server entry inspected when none is named
pub const DEFAULT_SERVER_NAME: &str = "filesystem";

/// Directories the filesystem server is expected to expose
pub const DEFAULT_EXPECTED_DIRECTORIES: [&str; 2] = ["D:/GitFolder", "D:/Updater"];

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Getters)]
pub struct Config {
    /// JSON document to inspect
    config_path: PathBuf,
    /// Key of the entry under `mcpServers`
    server_name: String,
    /// Paths that must all appear in the entry's `args`
    expected_directories: Vec<String>,
}

impl Config {
    pub fn new(
        config_path: PathBuf,
        server_name: String,
        expected_directories: Vec<String>,
    ) -> Self {
        Self {
            config_path,
            server_name,
            expected_directories,
        }
    }
}
