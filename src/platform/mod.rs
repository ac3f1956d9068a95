// Platform-specific locations for the tabstate settings file.
//
// Uses `cfg(target_os)` to pick the implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Name of the per-user directory holding tabstate configuration.
pub const APP_DIR_NAME: &str = "tabstate";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/tabstate` or `~/.config/tabstate`
/// - **macOS**: `~/Library/Application Support/tabstate`
/// - **Windows**: `%APPDATA%/tabstate`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        std::env::temp_dir().join(APP_DIR_NAME)
    }
}
