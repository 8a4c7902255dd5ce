// search-core/src/lib.rs
//! 文档搜索核心库
//!
//! Indexes a tree of content documents in memory and answers free-text
//! queries with a ranked, deduplicated list:
//! - front-matter parsing (YAML or TOML header, optional `title`)
//! - recursive indexing of content files
//! - additive relevance scoring with a docs-section bonus
//! - a build-once index cache owned by [`SearchEngine`]

use std::sync::Arc;

use once_cell::sync::OnceCell;

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod highlight;
pub mod index;
pub mod indexer;
pub mod models;
pub mod scoring;
pub mod search;

// 重导出核心类型
pub use config::{IndexConfig, RankingConfig, SearchConfig};
pub use error::{DocumentError, Result, SearchError};
pub use frontmatter::{FrontMatter, FrontMatterError, FrontMatterFormat, ParsedDocument, parse_document};
pub use highlight::{Segment, highlight, render_highlighted};
pub use index::SearchIndex;
pub use indexer::build_index;
pub use models::{IndexedDocument, ScoredResult};
pub use search::search_documents;

/// 搜索引擎统一入口
///
/// The index is built by the first caller that needs it and then shared
/// read-only for the life of the engine. Concurrent first callers wait on the
/// same build. A failed build is not cached, so the next query tries again.
pub struct SearchEngine {
    config: SearchConfig,
    index: OnceCell<Arc<SearchIndex>>,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            index: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The cached index, building it on first use.
    pub fn index(&self) -> Result<Arc<SearchIndex>> {
        self.index
            .get_or_try_init(|| build_index(&self.config).map(Arc::new))
            .cloned()
    }

    /// Whether the index has been built yet.
    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Ranked results for `query`. Blank queries return nothing without building the index.
    pub fn search(&self, query: &str) -> Result<Vec<ScoredResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let index = self.index()?;
        Ok(search_documents(index.documents(), query, &self.config.ranking))
    }
}
