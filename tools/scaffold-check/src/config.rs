use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory holding the extension scaffold, relative to the root dir.
pub const PROJECT_DIR: &str = "AiderVSExtension";

/// Environment variable that turns on per-check timing on stderr.
pub const TIMING_ENV: &str = "SCAFFOLD_CHECK_TIMING";

pub struct ValidatorConfig {
    pub root_dir: PathBuf,
    pub project_dir: PathBuf,
    pub timing: bool,
    /// Allow ANSI colors. They are still dropped when stdout is not a color terminal.
    pub color: bool,
}

impl ValidatorConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            project_dir: PathBuf::from(PROJECT_DIR),
            timing: std::env::var_os(TIMING_ENV).is_some(),
            color: true,
        }
    }

    /// Resolve against the current working directory, like the script it replaces.
    pub fn current() -> io::Result<Self> {
        let root = std::env::current_dir()?;
        Ok(Self::from_root(&root))
    }

    /// Path of a scaffold file, relative to `root_dir`.
    pub fn project_path(&self, rel: &str) -> PathBuf {
        self.project_dir.join(rel)
    }

    pub fn resolve(&self, target: &Path) -> PathBuf {
        self.root_dir.join(target)
    }
}
