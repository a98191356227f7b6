use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

/// Extensions of files that never contain scannable text. No leading dot,
/// lookup is exact-case: this is an extension heuristic, not content
/// sniffing, so a misleading extension is misclassified by design.
pub static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Images
        "bmp", "gif", "ico", "icns", "jpeg", "jpg", "png", "psd", "svgz", "tga", "tif", "tiff",
        "webp", "heic", "heif", "raw", "xcf",
        // Audio
        "aac", "aiff", "flac", "m4a", "mid", "midi", "mp3", "ogg", "opus", "wav", "wma",
        // Video
        "avi", "flv", "m4v", "mkv", "mov", "mp4", "mpeg", "mpg", "webm", "wmv",
        // Archives and compression
        "7z", "br", "bz2", "cab", "deb", "dmg", "gz", "iso", "jar", "lz", "lz4", "lzma", "lzo",
        "pkg", "rar", "rpm", "tar", "tbz2", "tgz", "txz", "xz", "zip", "zst",
        // Executables and libraries
        "a", "app", "bin", "com", "dll", "dylib", "elf", "exe", "ko", "lib", "msi", "o", "obj",
        "out", "so",
        // Compiled and intermediate code
        "class", "dex", "nib", "pdb", "pyc", "pyd", "pyo", "rlib", "swf", "wasm",
        // Fonts
        "eot", "otf", "ttc", "ttf", "woff", "woff2",
        // Documents
        "doc", "docx", "odp", "ods", "odt", "pdf", "ppt", "pptx", "xls", "xlsx",
        // Data and storage
        "db", "dat", "mdb", "myd", "myi", "realm", "sqlite", "sqlite3",
        // Machine learning artifacts
        "ckpt", "h5", "npy", "npz", "onnx", "pb", "pickle", "pkl", "pt", "pth", "safetensors",
    ])
});

/// Classify a path as binary from its extension alone: the substring after
/// the last `.` of the final component, no extension meaning none. O(1), no
/// filesystem access, no case normalization.
#[must_use]
pub fn is_path_binary(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => BINARY_EXTENSIONS.contains(ext.to_string_lossy().as_ref()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_binary_extension() {
        assert!(is_path_binary(Path::new("photo.png")));
        assert!(is_path_binary(Path::new("deep/in/tree/archive.tar.gz")));
        assert!(is_path_binary(Path::new("model.safetensors")));
    }

    #[test]
    fn test_text_extension() {
        assert!(!is_path_binary(Path::new("main.rs")));
        assert!(!is_path_binary(Path::new("notes.md")));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        // The table holds lowercase entries; lookup does not normalize.
        assert!(is_path_binary(Path::new("photo.png")));
        assert!(!is_path_binary(Path::new("photo.PNG")));
    }

    #[test]
    fn test_no_extension() {
        assert!(!is_path_binary(Path::new("Makefile")));
        assert!(!is_path_binary(Path::new(".gitignore")));
    }
}
