mod binary;
mod exclusion;
mod targets;

pub use binary::{is_path_binary, BINARY_EXTENSIONS};
pub use exclusion::{is_path_excluded, ExclusionRules};
pub use targets::{get_filepaths, ListFilesMode};
