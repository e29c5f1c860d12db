use crate::core::error::{RelayError, RelayResult};
use std::path::{Path, PathBuf};

/// Get the Hubrelay home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\hubrelay
/// - Linux: ~/.config/hubrelay
/// - macOS: ~/Library/Application Support/hubrelay
pub fn hubrelay_home() -> RelayResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| RelayError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("hubrelay"))
}

/// Get the config file path
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\hubrelay\config.yaml
/// - Linux: ~/.config/hubrelay/config.yaml
/// - macOS: ~/Library/Application Support/hubrelay/config.yaml
pub fn config_file() -> RelayResult<PathBuf> {
    Ok(hubrelay_home()?.join("config.yaml"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> RelayResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
