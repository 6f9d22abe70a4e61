// src/paths.rs
// Project-scoped path resolution and the home-directory scope guard

use crate::config::{CONFIG_FILE_NAME, STATE_FILE_NAME};
use crate::error::{MemError, Result};
use std::path::{Path, PathBuf};

/// Directory names under which the binary is expected to be installed
const INSTALL_DIRS: &[&str] = &["hooks", "bin"];

/// Resolved locations for one project's memory files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub memory_dir: PathBuf,
    pub sessions_dir: PathBuf,
}

impl ProjectPaths {
    /// Resolve paths from an explicit root, or from the executable's location.
    ///
    /// Fails with [`MemError::ScopeViolation`] when the result would land in a
    /// home-level shared directory.
    pub fn resolve(explicit_root: Option<&Path>) -> Result<Self> {
        let root = match explicit_root {
            Some(root) => root.to_path_buf(),
            None => {
                let exe = std::env::current_exe()?;
                root_from_exe(&exe).ok_or_else(|| {
                    MemError::NoProjectRoot(format!("no parent for {}", exe.display()))
                })?
            }
        };
        Self::for_root(&root, dirs::home_dir().as_deref())
    }

    /// Build paths for `root`, enforcing the scope guard against `home`.
    pub fn for_root(root: &Path, home: Option<&Path>) -> Result<Self> {
        let root = normalize(root);
        let memory_dir = root.join(".claude").join("memory");
        let sessions_dir = memory_dir.join("sessions");

        if let Some(home) = home {
            let home = normalize(home);
            if home.starts_with(&root) {
                return Err(MemError::ScopeViolation {
                    path: sessions_dir,
                    reason: format!(
                        "project root {} is the home directory or one of its ancestors",
                        root.display()
                    ),
                });
            }
            let shared = home.join(".claude");
            if sessions_dir.starts_with(&shared) {
                return Err(MemError::ScopeViolation {
                    path: sessions_dir,
                    reason: format!(
                        "{} holds cross-project configuration",
                        shared.display()
                    ),
                });
            }
        }

        Ok(Self {
            root,
            memory_dir,
            sessions_dir,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.memory_dir.join(CONFIG_FILE_NAME)
    }

    pub fn state_path(&self) -> PathBuf {
        self.sessions_dir.join(STATE_FILE_NAME)
    }
}

/// Derive the project root from the installed executable path.
///
/// `<root>/.claude/hooks/<exe>` and `<root>/.claude/bin/<exe>` map to `<root>`;
/// anything else maps to the executable's own directory.
pub fn root_from_exe(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?;
    let is_install_dir = dir
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| INSTALL_DIRS.contains(&n));
    if is_install_dir
        && let Some(claude_dir) = dir.parent()
        && claude_dir.file_name().and_then(|n| n.to_str()) == Some(".claude")
        && let Some(root) = claude_dir.parent()
    {
        return Some(root.to_path_buf());
    }
    Some(dir.to_path_buf())
}

/// Canonicalize when possible so symlinked spellings compare equal
fn normalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_from_hooks_install() {
        let root = root_from_exe(Path::new("/work/app/.claude/hooks/mem-hooks"));
        assert_eq!(root, Some(PathBuf::from("/work/app")));
    }

    #[test]
    fn test_root_from_bin_install() {
        let root = root_from_exe(Path::new("/work/app/.claude/bin/mem-hooks"));
        assert_eq!(root, Some(PathBuf::from("/work/app")));
    }

    #[test]
    fn test_root_from_other_location() {
        let root = root_from_exe(Path::new("/opt/tools/mem-hooks"));
        assert_eq!(root, Some(PathBuf::from("/opt/tools")));
    }

    #[test]
    fn test_hooks_dir_outside_claude_is_not_special() {
        let root = root_from_exe(Path::new("/work/hooks/mem-hooks"));
        assert_eq!(root, Some(PathBuf::from("/work/hooks")));
    }

    #[test]
    fn test_for_root_layout() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = ProjectPaths::for_root(dir.path(), None).unwrap();
        assert!(paths.sessions_dir.ends_with(".claude/memory/sessions"));
        assert!(paths.state_path().ends_with("sessions/.consolidation-state.json"));
        assert!(paths.config_path().ends_with(".claude/memory/config.toml"));
    }

    #[test]
    fn test_project_under_home_is_allowed() {
        let home = tempfile::TempDir::new().unwrap();
        let project = home.path().join("code").join("app");
        std::fs::create_dir_all(&project).unwrap();
        let paths = ProjectPaths::for_root(&project, Some(home.path())).unwrap();
        assert!(paths.root.ends_with("code/app"));
    }

    #[test]
    fn test_home_as_root_is_rejected() {
        let home = tempfile::TempDir::new().unwrap();
        let err = ProjectPaths::for_root(home.path(), Some(home.path())).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_ancestor_of_home_is_rejected() {
        let base = tempfile::TempDir::new().unwrap();
        let home = base.path().join("home").join("me");
        std::fs::create_dir_all(&home).unwrap();
        let err = ProjectPaths::for_root(base.path(), Some(&home)).unwrap_err();
        assert!(matches!(err, MemError::ScopeViolation { .. }));
    }

    #[test]
    fn test_shared_claude_dir_is_rejected() {
        let home = tempfile::TempDir::new().unwrap();
        let claude = home.path().join(".claude");
        std::fs::create_dir_all(&claude).unwrap();
        let err = ProjectPaths::for_root(&claude, Some(home.path())).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("cross-project"));
    }
}
