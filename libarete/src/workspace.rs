//! Locating the Arete workspace root.
//!
//! Resolution order:
//! 1. `ARETE_WORKSPACE_ROOT`, if it names an existing directory
//! 2. Walking up from the current directory
//! 3. Walking up from the running executable's directory
//! 4. The current directory itself

use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable the CLI sets to point integrations at a workspace.
pub const WORKSPACE_ENV: &str = "ARETE_WORKSPACE_ROOT";

/// How many ancestors discovery will inspect.
const MAX_ASCENT: usize = 10;

/// Whether `dir` looks like a workspace rather than, say, the CLI's own repo.
///
/// A workspace has both `context/` and `memory/`, or an `arete.yaml` manifest.
pub fn is_workspace(dir: &Path) -> bool {
    (dir.join("context").is_dir() && dir.join("memory").is_dir())
        || dir.join("arete.yaml").is_file()
}

/// Walk up from `start` looking for a workspace.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_ASCENT)
        .find(|dir| is_workspace(dir))
        .map(Path::to_path_buf)
}

/// Resolve the workspace root.
pub fn workspace_root() -> PathBuf {
    if let Some(root) = env::var_os(WORKSPACE_ENV).map(PathBuf::from) {
        if root.is_dir() {
            return root;
        }
        debug!(root = %root.display(), "{} is not a directory, ignoring", WORKSPACE_ENV);
    }

    let cwd = env::current_dir().ok();
    if let Some(root) = cwd.as_deref().and_then(find_workspace_root) {
        return root;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(root) = exe_dir.as_deref().and_then(find_workspace_root) {
        return root;
    }

    debug!("no workspace found, using current directory");
    cwd.unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn test_is_workspace_dirs() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_workspace(dir.path()));
        fs::create_dir(dir.path().join("context")).unwrap();
        assert!(!is_workspace(dir.path()));
        fs::create_dir(dir.path().join("memory")).unwrap();
        assert!(is_workspace(dir.path()));
    }

    #[test]
    fn test_is_workspace_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("arete.yaml"), "name: ws\n").unwrap();
        assert!(is_workspace(dir.path()));
    }

    #[test]
    fn test_find_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("arete.yaml"), "").unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_workspace_root(&nested), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_find_gives_up_after_limit() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("arete.yaml"), "").unwrap();
        let mut nested = dir.path().to_path_buf();
        for i in 0..MAX_ASCENT {
            nested.push(format!("d{}", i));
        }
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_workspace_root(&nested), None);
    }

    #[test]
    #[serial]
    fn test_env_override() {
        let dir = tempfile::tempdir().unwrap();
        temp_env::with_var(WORKSPACE_ENV, Some(dir.path()), || {
            assert_eq!(workspace_root(), dir.path());
        });
    }

    #[test]
    #[serial]
    fn test_env_override_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        temp_env::with_var(WORKSPACE_ENV, Some(&missing), || {
            assert_ne!(workspace_root(), missing);
        });
    }
}
