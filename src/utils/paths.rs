use std::path::Path;

/// Formats a path with `~` in place of the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use kc_analyzer::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.local/share/kc-analyzer");
/// // "~/.local/share/kc-analyzer" when the home directory is /home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_home(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
