// search-core/src/indexer.rs
//! 索引模块 - 遍历内容目录并构建内存索引

use std::fs;
use std::path::{Component, Path};
use std::time::Instant;

use walkdir::{DirEntry, WalkDir};

use crate::config::{IndexConfig, SearchConfig};
use crate::error::{DocumentError, Result, SearchError};
use crate::frontmatter::{FrontMatter, parse_document};
use crate::index::SearchIndex;
use crate::models::IndexedDocument;

/// Walk the content root and index every content file.
///
/// A file that cannot be read or parsed is logged and left out; only an
/// unusable content root fails the build.
pub fn build_index(config: &SearchConfig) -> Result<SearchIndex> {
    let root = config.content_root.as_path();
    check_content_root(root)?;

    let started = Instant::now();
    tracing::info!("Indexing documents under {}", root.display());

    let mut documents = Vec::new();
    let mut skipped = 0;

    for result in WalkDir::new(root).sort_by_file_name() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Traversal error under {}: {}", root.display(), e);
                continue;
            }
        };

        if !is_regular_file(&entry) || !is_content_file(entry.path(), &config.index) {
            continue;
        }

        match index_document(root, entry.path(), &config.index) {
            Ok(document) => {
                tracing::debug!(path = %document.path, title = %document.title, "Indexed document");
                documents.push(document);
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!(error = ?e, "Skipping {}", entry.path().display());
            }
        }
    }

    tracing::info!(
        "Indexed {} documents ({} skipped) in {:?}",
        documents.len(),
        skipped,
        started.elapsed()
    );

    Ok(SearchIndex::new(root, documents, skipped))
}

fn check_content_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|source| SearchError::ContentRootUnavailable {
        path: root.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(SearchError::ContentRootNotDirectory(root.to_path_buf()));
    }

    // Catches permission problems before the walk swallows them as per-entry errors.
    fs::read_dir(root).map_err(|source| SearchError::ContentRootUnavailable {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Files and symlinks to files. Directory links are never followed.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Read and parse a single content file into an index entry.
pub fn index_document(root: &Path, file: &Path, config: &IndexConfig) -> std::result::Result<IndexedDocument, DocumentError> {
    let source = fs::read_to_string(file).map_err(|source| DocumentError::Read {
        path: file.to_path_buf(),
        source,
    })?;

    let parsed = parse_document(&source).map_err(|source| DocumentError::FrontMatter {
        path: file.to_path_buf(),
        source,
    })?;

    let url_path = derive_url_path(root, file, config)
        .ok_or_else(|| DocumentError::OutsideRoot(file.to_path_buf()))?;

    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(IndexedDocument::new(
        derive_title(&parsed.front_matter, &file_name, config),
        url_path,
        derive_excerpt(&parsed.body, config),
    ))
}

/// Whether the file name ends with the content extension.
pub fn is_content_file(path: &Path, config: &IndexConfig) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(&config.content_suffix()))
        .unwrap_or(false)
}

/// Front-matter title when present and non-empty, otherwise the file name
/// without its content extension.
pub fn derive_title(front_matter: &FrontMatter, file_name: &str, config: &IndexConfig) -> String {
    match front_matter.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => file_name
            .strip_suffix(&config.content_suffix())
            .unwrap_or(file_name)
            .to_string(),
    }
}

/// Site-relative URL path of a content file.
///
/// `contents/docs/intro.mdx` maps to `/docs/intro` and
/// `contents/docs/index.mdx` maps to `/docs`. Returns `None` when `file` is
/// not below `root` or is not a content file.
pub fn derive_url_path(root: &Path, file: &Path, config: &IndexConfig) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;

    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let file_name = segments.pop()?;
    let stem = file_name.strip_suffix(&config.content_suffix())?;
    if stem != config.index_file_stem {
        segments.push(stem.to_string());
    }

    Some(format!("/{}", segments.join("/")))
}

/// First `excerpt_length` characters of the body on a single line, followed
/// by the excerpt marker. The marker is appended even to short bodies.
pub fn derive_excerpt(body: &str, config: &IndexConfig) -> String {
    let head: String = body.chars().take(config.excerpt_length).collect();
    format!("{}{}", head.replace('\n', " ").trim(), config.excerpt_marker)
}
