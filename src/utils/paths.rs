use std::path::{Component, Path};

/// Render a path as a POSIX-style string: `/`-separated, with any `.`
/// components dropped. Exclusion patterns are written against this form
/// regardless of the host separator convention.
#[must_use]
pub fn posix_path_string(path: &Path) -> String {
    let mut out = String::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                out.push_str(&prefix.as_os_str().to_string_lossy().replace('\\', "/"));
            }
            Component::RootDir => out.push('/'),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str("..");
            }
            Component::Normal(name) => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&name.to_string_lossy());
            }
        }
    }

    if out.is_empty() {
        out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        assert_eq!(posix_path_string(Path::new("a/b/c.txt")), "a/b/c.txt");
    }

    #[test]
    fn test_leading_cur_dir_dropped() {
        assert_eq!(posix_path_string(Path::new("./build/out")), "build/out");
    }

    #[test]
    fn test_absolute_path() {
        assert_eq!(posix_path_string(Path::new("/tmp/x")), "/tmp/x");
    }

    #[test]
    fn test_parent_components_kept() {
        assert_eq!(posix_path_string(Path::new("../x")), "../x");
    }

    #[test]
    fn test_empty_path_is_dot() {
        assert_eq!(posix_path_string(Path::new("")), ".");
        assert_eq!(posix_path_string(Path::new(".")), ".");
    }
}
