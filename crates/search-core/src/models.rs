// search-core/src/models.rs
//! 数据模型定义

use serde::{Deserialize, Serialize};

/// One searchable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDocument {
    pub title: String,
    /// Site-relative URL path, always starting with `/`.
    pub path: String,
    pub excerpt: String,
    /// Zero in the index; only meaningful on a [`ScoredResult`].
    pub relevance: i64,
}

impl IndexedDocument {
    pub fn new(title: impl Into<String>, path: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            excerpt: excerpt.into(),
            relevance: 0,
        }
    }

    /// Pair this document with the score computed for one query.
    pub fn scored(&self, relevance: i64) -> ScoredResult {
        ScoredResult {
            title: self.title.clone(),
            path: self.path.clone(),
            excerpt: self.excerpt.clone(),
            relevance,
        }
    }
}

/// A document ranked for a single query. This is what the query endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub title: String,
    pub path: String,
    pub excerpt: String,
    pub relevance: i64,
}
