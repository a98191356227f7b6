pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod selection;
pub mod utils;

use std::collections::HashSet;
use std::path::PathBuf;

pub use config::SiftConfig;
pub use error::{Result, SiftError};
pub use logging::{init_logs, LogConfig, LogLevel};
pub use selection::{
    get_filepaths, is_path_binary, is_path_excluded, ExclusionRules, ListFilesMode,
};

/// Select the files to scan: expand `paths` per `mode` using the
/// configuration's exclusion patterns, then drop files with a known binary
/// extension.
///
/// # Example
/// ```no_run
/// use sift::{select_files, SiftConfig};
/// # fn main() -> sift::Result<()> {
/// let config = SiftConfig::load()?;
/// let targets = select_files(&[".".into()], &config, config.scan.mode)?;
/// # Ok(())
/// # }
/// ```
pub fn select_files(
    paths: &[PathBuf],
    config: &SiftConfig,
    mode: ListFilesMode,
) -> Result<HashSet<PathBuf>> {
    let exclusions = config.compile_exclusions()?;
    let targets = get_filepaths(paths, &exclusions, mode)?;
    Ok(targets
        .into_iter()
        .filter(|path| !is_path_binary(path))
        .collect())
}
