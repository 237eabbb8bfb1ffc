//! giftq configuration.
//!
//! Settings are loaded once by the caller and passed explicitly into the
//! operations that need them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level giftq configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftqConfig {
    /// Directory holding the question database.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Extension of GIFT files inside `data_dir`.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Fewest questions a generated exam may hold.
    #[serde(default = "default_min_questions")]
    pub min_questions: usize,
    /// Most questions a generated exam may hold.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_extension() -> String {
    "gift".to_string()
}
fn default_min_questions() -> usize {
    15
}
fn default_max_questions() -> usize {
    20
}

impl Default for GiftqConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            extension: default_extension(),
            min_questions: default_min_questions(),
            max_questions: default_max_questions(),
        }
    }
}

impl GiftqConfig {
    /// Whether an exam of `count` questions is within bounds.
    pub fn accepts_exam_size(&self, count: usize) -> bool {
        (self.min_questions..=self.max_questions).contains(&count)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `giftq.toml` in the current directory
/// 2. `~/.config/giftq/config.toml`
///
/// `GIFTQ_DATA_DIR` overrides `data_dir`.
pub fn load_config_from(path: Option<&Path>) -> Result<GiftqConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("giftq.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => GiftqConfig::default(),
    };

    if let Ok(dir) = std::env::var("GIFTQ_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    Ok(config)
}

/// Parse and check a TOML config string.
pub fn parse_config(content: &str) -> Result<GiftqConfig> {
    let config: GiftqConfig = toml::from_str(content)?;
    if config.min_questions > config.max_questions {
        anyhow::bail!(
            "min_questions ({}) exceeds max_questions ({})",
            config.min_questions,
            config.max_questions
        );
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("giftq"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GiftqConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.extension, "gift");
        assert!(config.accepts_exam_size(15));
        assert!(config.accepts_exam_size(20));
        assert!(!config.accepts_exam_size(14));
        assert!(!config.accepts_exam_size(21));
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config("data_dir = \"exams\"\nmax_questions = 30\n").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("exams"));
        assert_eq!(config.min_questions, 15);
        assert_eq!(config.max_questions, 30);
    }

    #[test]
    fn parse_rejects_inverted_bounds() {
        assert!(parse_config("min_questions = 10\nmax_questions = 5\n").is_err());
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("/no/such/giftq.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("giftq.toml");
        std::fs::write(&path, "extension = \"txt\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.extension, "txt");
    }
}
