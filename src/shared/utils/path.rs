use dirs::home_dir;
use std::path::{Path, PathBuf};

/// Expands a leading `~` or `~/` to the home directory. `~user` is left alone.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = match home_dir() {
        Some(home) => home,
        None => return PathBuf::from(path),
    };

    match path.strip_prefix('~') {
        Some("") => home,
        Some(rest) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// Inverse of [`expand_tilde`], used to keep error messages short.
pub fn contract_tilde(path: &Path) -> String {
    let Some(home) = home_dir() else {
        return path.to_string_lossy().into_owned();
    };

    match path.strip_prefix(&home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.to_string_lossy()),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
