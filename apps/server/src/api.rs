//! HTTP endpoint: `GET /api/search?q=...`

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use search_core::{ScoredResult, SearchEngine};
use serde::Serialize;
use std::sync::Arc;

/// Raw query-string pairs. Repeated keys are allowed; the first `q` wins.
pub type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: QueryPairs) -> Self {
        let q = pairs.into_iter().find(|(key, _)| key == "q").map(|(_, value)| value);
        Self { q }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(engine: Arc<SearchEngine>) -> Router {
    Router::new()
        .route("/api/search", get(handle_search))
        .route("/health", get(handle_health))
        .layer(Extension(engine))
}

pub async fn handle_search(
    Query(pairs): Query<QueryPairs>,
    Extension(engine): Extension<Arc<SearchEngine>>,
) -> Response {
    let Some(query) = SearchParams::from_pairs(pairs).q.filter(|q| !q.trim().is_empty()) else {
        return Json(Vec::<ScoredResult>::new()).into_response();
    };

    let task_query = query.clone();
    // Indexing reads the content tree from disk on the first query.
    let outcome = tokio::task::spawn_blocking(move || engine.search(&task_query)).await;

    match outcome {
        Ok(Ok(results)) => {
            tracing::debug!("Search '{}' returned {} results", query, results.len());
            Json(results).into_response()
        }
        Ok(Err(e)) => {
            tracing::error!(error = ?e, "Search '{}' failed", query);
            search_failed()
        }
        Err(e) => {
            tracing::error!(error = ?e, "Search task for '{}' did not complete", query);
            search_failed()
        }
    }
}

async fn handle_health() -> &'static str {
    "ok"
}

fn search_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Search failed".to_string(),
        }),
    )
        .into_response()
}
