// search-core/src/error.rs
//! 错误类型

use std::path::PathBuf;

use crate::frontmatter::FrontMatterError;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures that abort an index build or a query.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("content root {} is unavailable", .path.display())]
    ContentRootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content root {} is not a directory", .0.display())]
    ContentRootNotDirectory(PathBuf),
}

/// A single content file that could not be turned into an index entry.
///
/// Never aborts a build: the indexer logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse front-matter of {}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("{} is outside of the content root", .0.display())]
    OutsideRoot(PathBuf),
}
