// search-core/src/index.rs
//! 内存索引

use std::path::{Path, PathBuf};

use crate::models::IndexedDocument;

/// Flat in-memory list of indexed documents, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    content_root: PathBuf,
    documents: Vec<IndexedDocument>,
    skipped: usize,
}

impl SearchIndex {
    pub fn new(content_root: impl Into<PathBuf>, documents: Vec<IndexedDocument>, skipped: usize) -> Self {
        Self {
            content_root: content_root.into(),
            documents,
            skipped,
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Content files that were found but could not be indexed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
