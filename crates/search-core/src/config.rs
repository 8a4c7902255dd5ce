// search-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Search engine configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Directory holding every indexable document.
    pub content_root: PathBuf,
    pub index: IndexConfig,
    pub ranking: RankingConfig,
}

/// Controls which files are indexed and how entries are derived from them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Content file extension, without the leading dot.
    pub content_extension: String,
    /// File stem of directory index documents (`index.mdx` maps to its directory).
    pub index_file_stem: String,
    /// Number of body characters kept in an excerpt.
    pub excerpt_length: usize,
    /// Always appended to an excerpt.
    pub excerpt_marker: String,
}

/// Query-time options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Documents whose path starts with this prefix get a bonus.
    pub docs_prefix: String,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("./contents"),
            index: IndexConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            content_extension: "mdx".to_string(),
            index_file_stem: "index".to_string(),
            excerpt_length: 150,
            excerpt_marker: "...".to_string(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            docs_prefix: "/docs".to_string(),
            max_results: 10,
        }
    }
}

impl SearchConfig {
    pub fn with_content_root(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            ..Default::default()
        }
    }
}

impl IndexConfig {
    /// `.mdx` style suffix matched against file names.
    pub fn content_suffix(&self) -> String {
        format!(".{}", self.content_extension.trim_start_matches('.'))
    }
}
