// Storage path utilities.
// Resolves the local data directory and per-key file paths.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base data directory (~/.local/share/gifgrid on Linux).
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gifgrid").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Path to the file backing a storage key.
pub fn key_path(base: &std::path::Path, key: &str) -> PathBuf {
    base.join(format!("{}.json", sanitize_key(key)))
}

/// Sanitize a key for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("search_history"), "search_history");
        assert_eq!(sanitize_key("with/slash"), "with_slash");
        assert_eq!(sanitize_key("a:b"), "a_b");
    }

    #[test]
    fn test_key_path() {
        let path = key_path(Path::new("/tmp/gifgrid"), "search_history");
        assert!(path.ends_with("gifgrid/search_history.json"));
    }
}
