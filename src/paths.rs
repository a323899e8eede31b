//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CLARIFI_CONFIG_PATH";

/// Path to Clarifi's debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("clarifi.log")
}

#[must_use]
#[cfg(windows)]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(home) = var_os("USERPROFILE") {
        return Some(PathBuf::from(home));
    }

    let drive = var_os("HOMEDRIVE");
    let path = var_os("HOMEPATH");
    if let (Some(drive), Some(path)) = (drive, path) {
        let mut combined = PathBuf::from(drive);
        combined.push(path);
        return Some(combined);
    }

    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA")
        .map(PathBuf::from)
        .or_else(|| home_dir_from(var_os).map(|home| home.join("AppData").join("Roaming")))
}

#[must_use]
#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("XDG_CONFIG_HOME").map(PathBuf::from).or_else(|| {
        home_dir_from(var_os).map(|home| {
            #[cfg(target_os = "macos")]
            {
                home.join("Library").join("Application Support")
            }

            #[cfg(not(target_os = "macos"))]
            {
                home.join(".config")
            }
        })
    })
}

/// Resolve the per-user configuration directory for the current platform.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_dir_from(&mut var_os)
}

/// Location of the Clarifi config file.
///
/// `CLARIFI_CONFIG_PATH` wins when set; otherwise the file lives under the
/// platform config directory.
#[must_use]
pub fn config_file() -> PathBuf {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_file_from(&mut var_os)
}

fn config_file_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> PathBuf {
    if let Some(path) = var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    config_dir_from(var_os)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clarifi")
        .join("config.json")
}
