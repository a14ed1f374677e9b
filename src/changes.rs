//! Changed-file detection for the upload's changed-files mode.
//!
//! The version-control query sits behind the [`ChangeLister`] capability so
//! the upload pipeline can be exercised with a mock; the production
//! implementation shells out to the `git` CLI. A failure here is expected
//! (no git, not a repository) and callers downgrade to a full upload rather
//! than treating it as an error.

use std::path::PathBuf;
use std::process::Command;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Error type for change listing (simple boxed error).
pub type ChangeListError = Box<dyn std::error::Error + Send + Sync>;

/// Capability: name the files that differ from the last committed snapshot.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait ChangeLister: Send + Sync {
    /// Paths relative to the project root that are modified against the last
    /// commit or untracked. Unfiltered; eligibility is the caller's concern.
    fn changed_files(&self) -> Result<Vec<String>, ChangeListError>;
}

/// Lists changes by invoking the `git` CLI in the project root.
pub struct GitChangeLister {
    project_root: PathBuf,
}

impl GitChangeLister {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    fn git(&self, args: &[&str]) -> Result<String, ChangeListError> {
        let output = Command::new("git")
            .current_dir(&self.project_root)
            .args(args)
            .output()?;
        if !output.status.success() {
            return Err(format!("git {} exited with {}", args.join(" "), output.status).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ChangeLister for GitChangeLister {
    fn changed_files(&self) -> Result<Vec<String>, ChangeListError> {
        // Modified against HEAD, then untracked; each invocation is blocking
        // and fully consumed before the next.
        let modified = self.git(&["diff", "--name-only", "HEAD"])?;
        let untracked = self.git(&["ls-files", "--others", "--exclude-standard"])?;
        let files = modified
            .lines()
            .chain(untracked.lines())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(files)
    }
}
