//! Read-only git queries backing the git-aware listing modes.
//!
//! All paths returned are relative to the queried directory, which may be a
//! subdirectory of the work tree. Failures surface as [`git2::Error`] through
//! the crate error type; nothing here retries or mutates repository state.

use std::path::{Path, PathBuf};

use git2::{ObjectType, Repository, StatusOptions, TreeWalkMode, TreeWalkResult};

use crate::error::Result;

/// True iff `path` lies inside a git work tree.
#[must_use]
pub fn is_git_dir(path: &Path) -> bool {
    Repository::discover(path)
        .map(|repo| repo.workdir().is_some())
        .unwrap_or(false)
}

fn open_worktree(path: &Path) -> Result<(Repository, PathBuf)> {
    let repo = Repository::discover(path)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| git2::Error::from_str("repository has no work tree"))?
        .to_path_buf();
    Ok((repo, workdir))
}

/// Path components of `path` below the work tree root, empty when `path` is
/// the root itself. Both sides are canonicalized so symlinked temp dirs and
/// relative inputs compare correctly.
fn subtree_prefix(workdir: &Path, path: &Path) -> Result<PathBuf> {
    let path = path.canonicalize()?;
    let workdir = workdir.canonicalize()?;
    Ok(path
        .strip_prefix(&workdir)
        .map(Path::to_path_buf)
        .unwrap_or_default())
}

/// Files in the git index: committed and staged, gitignored excluded
/// (`git ls-files` semantics).
pub fn git_ls(path: &Path) -> Result<Vec<PathBuf>> {
    let (repo, workdir) = open_worktree(path)?;
    let prefix = subtree_prefix(&workdir, path)?;

    let index = repo.index()?;
    let mut files = Vec::new();
    for entry in index.iter() {
        let rel = PathBuf::from(String::from_utf8_lossy(&entry.path).into_owned());
        if let Ok(stripped) = rel.strip_prefix(&prefix) {
            files.push(stripped.to_path_buf());
        }
    }
    Ok(files)
}

/// Untracked files that git does not ignore
/// (`git ls-files --others --exclude-standard` semantics).
pub fn git_ls_unstaged(path: &Path) -> Result<Vec<PathBuf>> {
    let (repo, workdir) = open_worktree(path)?;
    let prefix = subtree_prefix(&workdir, path)?;

    let mut status_opts = StatusOptions::new();
    status_opts
        .include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);

    let statuses = repo.statuses(Some(&mut status_opts))?;
    let mut files = Vec::new();
    for entry in statuses.iter() {
        if !entry.status().is_wt_new() {
            continue;
        }
        if let Some(p) = entry.path() {
            if let Ok(stripped) = Path::new(p).strip_prefix(&prefix) {
                files.push(stripped.to_path_buf());
            }
        }
    }
    Ok(files)
}

/// Blobs reachable from the tree of `reference` (for example `HEAD`),
/// relative to `working_dir`.
pub fn get_filepaths_from_ref(reference: &str, working_dir: &Path) -> Result<Vec<PathBuf>> {
    let (repo, workdir) = open_worktree(working_dir)?;
    let prefix = subtree_prefix(&workdir, working_dir)?;

    let tree = repo.revparse_single(reference)?.peel_to_commit()?.tree()?;

    let mut files = Vec::new();
    tree.walk(TreeWalkMode::PreOrder, |root, entry| {
        if entry.kind() == Some(ObjectType::Blob) {
            if let Some(name) = entry.name() {
                let rel = PathBuf::from(format!("{root}{name}"));
                if let Ok(stripped) = rel.strip_prefix(&prefix) {
                    files.push(stripped.to_path_buf());
                }
            }
        }
        TreeWalkResult::Ok
    })?;
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_git_dir_plain_directory() {
        let temp = TempDir::new().unwrap();
        assert!(!is_git_dir(temp.path()));
    }

    #[test]
    fn test_is_git_dir_after_init_and_in_subdir() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        assert!(is_git_dir(temp.path()));

        let sub = temp.path().join("src");
        std::fs::create_dir(&sub).unwrap();
        assert!(is_git_dir(&sub));
    }

    #[test]
    fn test_git_ls_no_repo() {
        let temp = TempDir::new().unwrap();
        assert!(git_ls(temp.path()).is_err());
    }

    #[test]
    fn test_get_filepaths_from_ref_unborn_head() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        assert!(get_filepaths_from_ref("HEAD", temp.path()).is_err());
    }
}
