//! Path handling for the Zellij sandbox.
//!
//! Inside the sandbox `/host` is the cwd of the last focused terminal, or the
//! folder Zellij was started from. Started from a home directory that makes
//! `/host` the user's home.

use std::path::PathBuf;

/// File name of the OTLP trace export inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "zgallery-otlp.json";

/// Returns the data directory for zgallery files.
///
/// Resolves to `~/.local/share/zellij/zgallery` on the host when Zellij was
/// started from the home directory.
///
/// ```
/// use zgallery::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zgallery"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zgallery")
}

/// Expands a leading `~` to the sandbox's `/host` prefix.
///
/// ```
/// use zgallery::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("themes/~/x.toml"), "themes/~/x.toml");
        assert_eq!(expand_tilde("~user/x.toml"), "~user/x.toml");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        let path = get_data_dir().join(TRACE_FILE_NAME);
        assert!(path.ends_with("zgallery/zgallery-otlp.json"));
    }
}
