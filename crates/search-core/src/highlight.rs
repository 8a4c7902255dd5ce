// search-core/src/highlight.rs
//! 查询高亮 - split result text around case-insensitive query matches

/// A run of text that either matched the query or did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

/// Split `text` into plain and matching segments.
///
/// Matching is case-insensitive and non-overlapping, the same rule used for
/// scoring. A match that starts or ends inside the lowercase expansion of a
/// single character is left plain.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return vec![Segment::Plain(text)];
    }

    let (lower_text, origins) = lowercase_with_origins(text);
    let is_boundary = |offset: usize| offset == 0 || origins[offset] != origins[offset - 1];

    let mut segments = Vec::new();
    let mut last_end = 0;

    for (start, matched) in lower_text.match_indices(&query) {
        let end = start + matched.len();
        if !is_boundary(start) || !is_boundary(end) {
            continue;
        }

        let (start, end) = (origins[start], origins[end]);
        if start > last_end {
            segments.push(Segment::Plain(&text[last_end..start]));
        }
        segments.push(Segment::Match(&text[start..end]));
        last_end = end;
    }

    if last_end < text.len() {
        segments.push(Segment::Plain(&text[last_end..]));
    }

    segments
}

/// Lowercase `text` char by char, recording for every byte of the result the
/// offset of the original character it came from. The table has one extra
/// entry, `text.len()`, for the end of the string.
fn lowercase_with_origins(text: &str) -> (String, Vec<usize>) {
    let mut lower = String::with_capacity(text.len());
    let mut origins = Vec::with_capacity(text.len() + 1);

    for (offset, c) in text.char_indices() {
        for lc in c.to_lowercase() {
            lower.push(lc);
            origins.extend(std::iter::repeat_n(offset, lc.len_utf8()));
        }
    }
    origins.push(text.len());

    (lower, origins)
}

/// Render `text` with every match wrapped in `open` / `close`.
pub fn render_highlighted(text: &str, query: &str, open: &str, close: &str) -> String {
    highlight(text, query)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s.to_string(),
            Segment::Match(s) => format!("{open}{s}{close}"),
        })
        .collect()
}
