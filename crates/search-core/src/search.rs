// search-core/src/search.rs
//! 搜索模块 - 过滤、打分、去重、排序

use std::collections::HashSet;

use crate::config::RankingConfig;
use crate::models::{IndexedDocument, ScoredResult};
use crate::scoring::{calculate_relevance, is_candidate};

/// Rank `documents` against `query`.
///
/// Pipeline: substring pre-filter, scoring, drop non-positive scores, dedup
/// by path (first one wins), sort by relevance descending then path
/// ascending, truncate to `max_results`.
pub fn search_documents(documents: &[IndexedDocument], query: &str, ranking: &RankingConfig) -> Vec<ScoredResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let lower_query = query.to_lowercase();

    let scored = documents
        .iter()
        .filter(|document| is_candidate(document, &lower_query))
        .map(|document| document.scored(calculate_relevance(document, query, &ranking.docs_prefix)))
        .filter(|result| result.relevance > 0);

    let mut seen = HashSet::new();
    let mut results: Vec<ScoredResult> = scored
        .filter(|result| seen.insert(result.path.clone()))
        .collect();

    results.sort_by(|a, b| b.relevance.cmp(&a.relevance).then_with(|| a.path.cmp(&b.path)));
    results.truncate(ranking.max_results);

    tracing::debug!("Query '{}' matched {} documents", query, results.len());
    results
}
