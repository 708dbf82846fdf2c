use std::path::{Path, PathBuf};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::errors::{ConfigCheckError, ConfigCheckResult};

/// Expand home directory (~) in path
///
/// Only a leading `~` component is replaced; `~user` forms are left alone.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Location of the MCP client configuration in the user's home directory
pub fn default_config_path() -> ConfigCheckResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_CONFIG_FILE))
        .ok_or(ConfigCheckError::HomeDirectoryNotFound)
}
