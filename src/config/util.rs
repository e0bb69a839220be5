//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← start
/// /home/user/site/quire.toml   ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Check `base` shape: leading and trailing slash.
pub fn is_valid_base(base: &str) -> bool {
    base.starts_with('/') && base.ends_with('/')
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("quire.toml"), "title = \"x\"").unwrap();
        let nested = root.join("docs/guide/stubs");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(&nested, Path::new("quire.toml")).unwrap();
        assert_eq!(found, root.join("quire.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file(dir.path(), Path::new("does-not-exist-quire.toml")).is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert!(find_config_file(Path::new("/"), &path).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_is_valid_base() {
        assert!(is_valid_base("/"));
        assert!(is_valid_base("/gripmock/"));
        assert!(!is_valid_base("gripmock/"));
        assert!(!is_valid_base("/gripmock"));
        assert!(!is_valid_base(""));
    }
}
