//! Sandbox path handling.
//!
//! Inside the Zellij sandbox the host filesystem is visible under `/host`,
//! which normally resolves to the directory Zellij was started from. User
//! supplied paths such as `favorites_dir = "~/movies"` are mapped onto it.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Directory holding `favorites.json` and the trace file.
///
/// Resolves to `/host/.local/share/zellij/marquee`, typically
/// `~/.local/share/zellij/marquee` on the host.
///
/// # Examples
///
/// ```
/// use marquee::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/marquee"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("marquee")
}

/// Maps a configured path onto the sandbox.
///
/// `~` and `~/...` move under [`HOST_ROOT`]; everything else is kept.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        PathBuf::from(HOST_ROOT)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(HOST_ROOT).join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Host-side spelling of a sandbox path, for log messages.
#[must_use]
pub fn display_path(path: &std::path::Path) -> String {
    let text = path.to_string_lossy();
    match text.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => text.into_owned(),
    }
}
