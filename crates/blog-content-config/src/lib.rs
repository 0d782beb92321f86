use blog_content_engine::{
    Chunking, Detection, MAX_BLOCK_LEN, Pipeline, PipelineSettings, UNTITLED_TITLE,
    preview::PREVIEW_LEN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkingMode {
    /// Cut every `max_block_len` characters regardless of content.
    #[default]
    Fixed,
    /// Avoid cutting inside HTML tags, prefer whitespace.
    Boundary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    #[default]
    Patterns,
    CommonMark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_block_len: usize,
    pub preview_len: usize,
    pub untitled_title: String,
    pub chunking: ChunkingMode,
    pub detection: DetectionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_block_len: MAX_BLOCK_LEN,
            preview_len: PREVIEW_LEN,
            untitled_title: UNTITLED_TITLE.to_string(),
            chunking: ChunkingMode::default(),
            detection: DetectionMode::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blog-content");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            max_block_len: self.max_block_len,
            preview_len: self.preview_len,
            untitled_title: self.untitled_title.clone(),
            chunking: match self.chunking {
                ChunkingMode::Fixed => Chunking::FixedWidth,
                ChunkingMode::Boundary => Chunking::BoundaryAware,
            },
            detection: match self.detection {
                DetectionMode::Patterns => Detection::Patterns,
                DetectionMode::CommonMark => Detection::CommonMark,
            },
        }
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(&self.settings())
    }
}
