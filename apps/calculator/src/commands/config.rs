//! # Config Commands
//!
//! Loading and retrieval of the effective application configuration.

use std::path::Path;

use tracing::debug;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Loads the layered configuration.
///
/// ## Arguments
/// * `file` - Optional TOML file from `--config` / `FEE_CONFIG_FILE`
pub fn load_config(file: Option<&Path>) -> Result<ConfigState, ApiError> {
    debug!(file = ?file, "load_config command");
    Ok(ConfigState::load(file)?)
}

/// Gets the current application configuration.
///
/// ## When Used
/// - `fee-calculator config` (inspect layered settings)
/// - Front ends that need the title, intro and currency symbol
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_load_failure_maps_to_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fee.toml");
        std::fs::write(&path, "paper_width = 500\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();

        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.message, "Invalid value for paper_width");
        assert_eq!(err.exit_code(), 1);
    }
}
