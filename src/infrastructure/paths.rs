//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which maps
//! to the directory Zellij was started from (usually the user's home). User
//! supplied paths such as `catalog_file` and `theme_file` are written as host
//! paths and translated here.

use std::path::PathBuf;

/// Returns the plugin data directory, `/host/.local/share/zellij/catalist`.
///
/// Holds the rotating log file.
///
/// # Examples
///
/// ```
/// use catalist::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/catalist"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("catalist")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use catalist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalog.json"), "/host/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix so paths read as they do on the host.
///
/// Used when a sandbox path is shown to the user, e.g. on the loading screen.
///
/// # Examples
///
/// ```
/// use catalist::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/data/products.json"), "/data/products.json");
/// assert_eq!(strip_host_prefix("/hostname/file"), "/hostname/file");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some(rest) if rest.is_empty() => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}
