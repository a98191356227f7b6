use std::path::Path;

use regex::Regex;

use crate::error::{Result, SiftError};
use crate::utils::posix_path_string;

/// Compiled exclusion patterns, matched against POSIX-style path strings.
///
/// Directory probes get a trailing `/` appended before matching, file probes
/// do not. A pattern meant to exclude a whole directory must therefore end
/// with a `/` (for example `(^|/)node_modules/`); without it the pattern
/// never matches a directory. Matching is a search, not a full-string match.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    patterns: Vec<Regex>,
}

impl ExclusionRules {
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|e| SiftError::InvalidPattern {
                    pattern: p.as_ref().to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True iff any pattern matches the probe string for `path`.
    ///
    /// Whether `path` is a directory is a live filesystem check; a path that
    /// does not exist probes as a file.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let mut probe = posix_path_string(path);
        if path.is_dir() {
            probe.push('/');
        }
        self.patterns.iter().any(|r| r.is_match(&probe))
    }
}

pub fn is_path_excluded(path: &Path, exclusions: &ExclusionRules) -> bool {
    exclusions.is_excluded(path)
}
