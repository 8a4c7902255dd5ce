// search-core/src/scoring.rs
//! Relevance scoring.
//!
//! Scores are plain integers built from additive bonuses and penalties:
//!
//! | Condition                                   | Points |
//! |---------------------------------------------|--------|
//! | title equals query                          | +100   |
//! | title contains query (not equal)            | +50    |
//! | ...and title starts with query              | +25    |
//! | excerpt contains query                      | +30    |
//! | each further occurrence in the excerpt      | +5     |
//! | title shorter than 5 characters             | -10    |
//! | path starts with the docs prefix            | +10    |
//!
//! All comparisons are case-insensitive.

use crate::models::IndexedDocument;

pub const EXACT_TITLE_BONUS: i64 = 100;
pub const TITLE_CONTAINS_BONUS: i64 = 50;
pub const TITLE_PREFIX_BONUS: i64 = 25;
pub const EXCERPT_CONTAINS_BONUS: i64 = 30;
pub const EXCERPT_REPEAT_BONUS: i64 = 5;
pub const SHORT_TITLE_PENALTY: i64 = 10;
pub const SHORT_TITLE_LENGTH: usize = 5;
pub const DOCS_PREFIX_BONUS: i64 = 10;

/// Score `document` against `query`.
pub fn calculate_relevance(document: &IndexedDocument, query: &str, docs_prefix: &str) -> i64 {
    let query = query.to_lowercase();
    let title = document.title.to_lowercase();
    let excerpt = document.excerpt.to_lowercase();

    let mut score = 0;

    if title == query {
        score += EXACT_TITLE_BONUS;
    } else if title.contains(&query) {
        score += TITLE_CONTAINS_BONUS;
        if title.starts_with(&query) {
            score += TITLE_PREFIX_BONUS;
        }
    }

    let occurrences = count_occurrences(&excerpt, &query);
    if occurrences > 0 {
        score += EXCERPT_CONTAINS_BONUS;
        score += (occurrences as i64 - 1) * EXCERPT_REPEAT_BONUS;
    }

    if document.title.chars().count() < SHORT_TITLE_LENGTH {
        score -= SHORT_TITLE_PENALTY;
    }

    if document.path.starts_with(docs_prefix) {
        score += DOCS_PREFIX_BONUS;
    }

    score
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
///
/// Literal matching: characters like `.` `*` `(` in the needle have no special meaning.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Candidate pre-filter: the query appears in the title or the excerpt.
pub fn is_candidate(document: &IndexedDocument, lower_query: &str) -> bool {
    document.title.to_lowercase().contains(lower_query)
        || document.excerpt.to_lowercase().contains(lower_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn doc(title: &str, path: &str, excerpt: &str) -> IndexedDocument {
        IndexedDocument::new(title, path, excerpt)
    }

    #[rstest]
    #[case("aaaa", "aa", 2)]
    #[case("abcabc", "abc", 2)]
    #[case("a.b.c", ".", 2)]
    #[case("price is $5 (approx)", "(approx)", 1)]
    #[case("anything", "", 0)]
    #[case("abc", "x", 0)]
    fn test_count_occurrences(#[case] haystack: &str, #[case] needle: &str, #[case] expected: usize) {
        assert_eq!(count_occurrences(haystack, needle), expected);
    }

    #[test]
    fn test_exact_title_match() {
        let d = doc("Routing", "/blog/routing", "Nothing relevant...");
        assert_eq!(calculate_relevance(&d, "routing", "/docs"), EXACT_TITLE_BONUS);
    }

    #[test]
    fn test_title_prefix_and_contains() {
        let prefix = doc("Routing Basics", "/blog/a", "x...");
        let contains = doc("Advanced Routing", "/blog/b", "x...");

        assert_eq!(
            calculate_relevance(&prefix, "routing", "/docs"),
            TITLE_CONTAINS_BONUS + TITLE_PREFIX_BONUS
        );
        assert_eq!(calculate_relevance(&contains, "routing", "/docs"), TITLE_CONTAINS_BONUS);
    }

    #[test]
    fn test_excerpt_occurrences_add_five_each() {
        let once = doc("Unrelated Title", "/blog/a", "cache the results...");
        let twice = doc("Unrelated Title", "/blog/a", "cache the cache results...");

        let once_score = calculate_relevance(&once, "cache", "/docs");
        let twice_score = calculate_relevance(&twice, "cache", "/docs");

        assert_eq!(once_score, EXCERPT_CONTAINS_BONUS);
        assert_eq!(twice_score - once_score, EXCERPT_REPEAT_BONUS);
    }

    #[test]
    fn test_short_title_penalty() {
        let d = doc("API", "/blog/api", "nothing...");
        assert_eq!(calculate_relevance(&d, "api", "/docs"), EXACT_TITLE_BONUS - SHORT_TITLE_PENALTY);
    }

    #[test]
    fn test_short_title_counts_characters_not_bytes() {
        let d = doc("日本語です", "/blog/a", "...");
        assert_eq!(calculate_relevance(&d, "日本語です", "/docs"), EXACT_TITLE_BONUS);
    }

    #[test]
    fn test_docs_prefix_bonus() {
        let docs = doc("Same Title", "/docs/a", "shared words...");
        let blog = doc("Same Title", "/blog/a", "shared words...");
        let diff = calculate_relevance(&docs, "shared", "/docs") - calculate_relevance(&blog, "shared", "/docs");
        assert_eq!(diff, DOCS_PREFIX_BONUS);
    }

    #[test]
    fn test_case_insensitive() {
        let d = doc("SQL Injection Basics", "/blog/sql", "Learn SQL injection and sql escaping...");
        assert_eq!(
            calculate_relevance(&d, "sql", "/docs"),
            calculate_relevance(&d, "SQL", "/docs")
        );
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let d = doc("Regex Guide", "/blog/regex", "use a.* to match, not a.*b...");
        // `.*` would match everything if treated as a pattern
        assert_eq!(
            calculate_relevance(&d, "a.*", "/docs"),
            EXCERPT_CONTAINS_BONUS + EXCERPT_REPEAT_BONUS
        );
    }

    #[test]
    fn test_is_candidate() {
        let d = doc("Getting Started", "/docs/start", "Install the CLI...");
        assert!(is_candidate(&d, "started"));
        assert!(is_candidate(&d, "cli"));
        assert!(!is_candidate(&d, "deploy"));
    }
}
