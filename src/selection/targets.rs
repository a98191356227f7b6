use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SiftError};
use crate::git::{get_filepaths_from_ref, git_ls, git_ls_unstaged, is_git_dir};
use crate::selection::ExclusionRules;

/// Controls how [`get_filepaths`] expands its input paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ListFilesMode {
    /// Inputs must all be plain files; a directory is an error.
    FilesOnly,
    /// Files committed at `HEAD`.
    GitCommitted,
    /// Files in the git index: committed and staged, gitignored excluded.
    GitCommittedOrStaged,
    /// Like `All`, minus the paths git ignores.
    #[default]
    AllButGitignored,
    /// Every file under the tree, git-aware or not.
    All,
}

/// Expand `paths` into the set of files to scan.
///
/// Plain file inputs are added as-is; exclusion patterns only apply to paths
/// discovered by expanding a directory. Inputs that are neither file nor
/// directory (missing, broken symlink) are skipped. The result is a set: no
/// ordering guarantee, and overlapping inputs never produce duplicates.
///
/// Fails with [`SiftError::UnexpectedDirectory`] when a directory appears
/// among the inputs under [`ListFilesMode::FilesOnly`]; git query failures
/// propagate unchanged.
pub fn get_filepaths(
    paths: &[PathBuf],
    exclusions: &ExclusionRules,
    mode: ListFilesMode,
) -> Result<HashSet<PathBuf>> {
    let mut targets = HashSet::new();

    for path in paths {
        if path.is_file() {
            targets.insert(path.clone());
        } else if path.is_dir() {
            if mode == ListFilesMode::FilesOnly {
                return Err(SiftError::UnexpectedDirectory { path: path.clone() });
            }
            for candidate in expand_directory(path, mode)? {
                if !exclusions.is_excluded(&candidate) {
                    targets.insert(candidate);
                }
            }
        }
    }

    debug!(count = targets.len(), "selected scan targets");
    Ok(targets)
}

fn expand_directory(dir: &Path, mode: ListFilesMode) -> Result<Vec<PathBuf>> {
    if mode != ListFilesMode::All && is_git_dir(dir) {
        let listed = if mode == ListFilesMode::GitCommitted {
            get_filepaths_from_ref("HEAD", dir)?
        } else {
            git_ls(dir)?
        };
        let mut candidates: Vec<PathBuf> =
            listed.into_iter().map(|rel| dir.join(rel)).collect();

        if mode == ListFilesMode::AllButGitignored {
            candidates.extend(git_ls_unstaged(dir)?.into_iter().map(|rel| dir.join(rel)));
        }

        debug!(dir = %dir.display(), count = candidates.len(), "git listing");
        Ok(candidates)
    } else {
        Ok(walk_directory(dir))
    }
}

/// Full recursive walk of `dir` flattened to files. Unreadable or vanished
/// entries are skipped and the walk continues.
fn walk_directory(dir: &Path) -> Vec<PathBuf> {
    let walker = ignore::WalkBuilder::new(dir).standard_filters(false).build();

    let mut files = Vec::new();
    for entry_result in walker {
        let Ok(entry) = entry_result else { continue };
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    files
}
