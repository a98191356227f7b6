use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SiftError};
use crate::logging::LogConfig;
use crate::selection::{ExclusionRules, ListFilesMode};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SiftConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Exclusion regexes, matched against POSIX-style path strings.
    /// Patterns targeting a directory subtree must end with a `/`.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub mode: ListFilesMode,
}

fn default_exclude() -> Vec<String> {
    vec![
        r"(^|/)\.git/".to_string(),
        r"(^|/)node_modules/".to_string(),
        r"(^|/)target/".to_string(),
        r"(^|/)vendor/".to_string(),
        r"(^|/)\.venv/".to_string(),
        r"(^|/)__pycache__/".to_string(),
        r"\.min\.js$".to_string(),
        r"\.min\.css$".to_string(),
        r"\.lock$".to_string(),
    ]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            mode: ListFilesMode::default(),
        }
    }
}

impl SiftConfig {
    pub fn load() -> Result<Self> {
        let config_path = Path::new("sift.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: SiftConfig =
            toml::from_str(&content).map_err(|e| SiftError::Toml(e.to_string()))?;
        // Fail at load time rather than on first use.
        config.compile_exclusions()?;
        Ok(config)
    }

    pub fn compile_exclusions(&self) -> Result<ExclusionRules> {
        ExclusionRules::compile(&self.scan.exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_default_config() {
        let config = SiftConfig::default();
        assert_eq!(config.scan.mode, ListFilesMode::AllButGitignored);
        assert!(config
            .scan
            .exclude
            .contains(&r"(^|/)node_modules/".to_string()));
        assert_eq!(config.log.level, LogLevel::Off);
        assert!(config.compile_exclusions().is_ok());
    }

    #[test]
    fn test_load_from_valid_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("sift.toml");
        std::fs::write(
            &config_path,
            r#"
[scan]
exclude = ["(^|/)fixtures/"]
mode = "git-committed"

[log]
level = "info"
"#,
        )
        .unwrap();
        let config = SiftConfig::load_from(&config_path).unwrap();
        assert_eq!(config.scan.exclude, vec!["(^|/)fixtures/"]);
        assert_eq!(config.scan.mode, ListFilesMode::GitCommitted);
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn test_load_from_fails_on_invalid_exclusion_regex() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("sift.toml");
        std::fs::write(
            &config_path,
            r#"
[scan]
exclude = ["[invalid"]
"#,
        )
        .unwrap();
        let result = SiftConfig::load_from(&config_path);
        assert!(matches!(result, Err(SiftError::InvalidPattern { .. })));
    }

    #[test]
    fn test_load_from_fails_on_bad_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("sift.toml");
        std::fs::write(&config_path, "[scan\nexclude = 3").unwrap();
        let result = SiftConfig::load_from(&config_path);
        assert!(matches!(result, Err(SiftError::Toml(_))));
    }
}
