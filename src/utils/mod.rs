mod paths;

pub use paths::posix_path_string;
