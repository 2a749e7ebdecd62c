use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_daily_new_limit")]
    pub daily_new_limit: usize,
    #[serde(default = "default_daily_review_limit")]
    pub daily_review_limit: usize,
    #[serde(default = "default_line_count")]
    pub line_count: usize,
    #[serde(default = "default_line_length")]
    pub line_length: usize,
    #[serde(default = "default_average_word_length")]
    pub average_word_length: usize,
    /// Overrides the platform data directory for progress files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

fn default_daily_new_limit() -> usize {
    5
}
fn default_daily_review_limit() -> usize {
    20
}
fn default_line_count() -> usize {
    3
}
fn default_line_length() -> usize {
    25
}
fn default_average_word_length() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_new_limit: default_daily_new_limit(),
            daily_review_limit: default_daily_review_limit(),
            line_count: default_line_count(),
            line_length: default_line_length(),
            average_word_length: default_average_word_length(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ivrikey")
            .join("config.toml")
    }

    /// Clamp hand-edited values into ranges the generator and queue accept.
    pub fn validate(&mut self) {
        self.daily_new_limit = self.daily_new_limit.min(500);
        self.daily_review_limit = self.daily_review_limit.min(500);
        self.line_count = self.line_count.clamp(1, 20);
        self.line_length = self.line_length.clamp(5, 200);
        self.average_word_length = self.average_word_length.clamp(2, 15);
        if self.data_dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
            self.data_dir = None;
        }
    }
}
