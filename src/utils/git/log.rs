//! `git log` backed history provider.

use super::HistoryProvider;
use crate::{debug, utils::date::PublishDate, utils::exec::Cmd};
use std::path::{Path, PathBuf};

/// Queries `git log -n1 --format=%ad --date=short -- <file>`.
#[derive(Debug, Clone)]
pub struct GitHistory {
    program: PathBuf,
}

impl GitHistory {
    /// Use a specific git executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate `git` on `PATH`.
    pub fn detect() -> Option<Self> {
        which::which("git").ok().map(Self::new)
    }

    /// Raw short date string for `path`, as printed by git.
    fn query(&self, path: &Path) -> anyhow::Result<String> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file = path.file_name().unwrap_or(path.as_os_str());

        Cmd::new(&self.program)
            .args(["log", "-n1", "--format=%ad", "--date=short", "--"])
            .arg(file)
            .cwd(dir)
            .stdout()
    }
}

impl HistoryProvider for GitHistory {
    fn lookup_last_modified(&self, path: &Path) -> Option<PublishDate> {
        let raw = match self.query(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("git"; "history lookup failed for {}: {}", path.display(), e);
                return None;
            }
        };

        // Untracked files produce empty output with a zero exit code.
        if raw.is_empty() {
            debug!("git"; "no commits touch {}", path.display());
            return None;
        }

        match PublishDate::parse(&raw) {
            Ok(date) => Some(date),
            Err(e) => {
                debug!("git"; "unexpected date from git for {}: {}", path.display(), e);
                None
            }
        }
    }
}
