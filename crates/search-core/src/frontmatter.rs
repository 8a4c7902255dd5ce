// search-core/src/frontmatter.rs
//! Front-matter 解析
//!
//! A content file may start with a metadata header:
//!
//! ```text
//! ---
//! title: Getting Started
//! ---
//! Body text...
//! ```
//!
//! YAML headers are fenced by `---`, TOML headers by `+++`. Only `title` is
//! read; every other key belongs to the rendering layer and is ignored here.

/// Header syntax detected at the top of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    Yaml,
    Toml,
}

impl FrontMatterFormat {
    fn from_opening_line(line: &str) -> Option<Self> {
        match line.trim_end() {
            "---" => Some(Self::Yaml),
            "+++" => Some(Self::Toml),
            _ => None,
        }
    }

    fn is_closing_line(self, line: &str) -> bool {
        let line = line.trim_end();
        match self {
            Self::Yaml => line == "---" || line == "...",
            Self::Toml => line == "+++",
        }
    }

    fn fence(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Typed metadata header. A missing `title` is a normal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// `None` when the document has no header at all.
    pub format: Option<FrontMatterFormat>,
}

/// A content file split into metadata and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub front_matter: FrontMatter,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("front-matter opened with `{0}` is never closed")]
    Unterminated(&'static str),

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML front-matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("front-matter must be a key/value mapping")]
    NotAMapping,

    #[error("`title` must be a scalar value")]
    InvalidTitle,
}

/// Split `source` into front-matter and body.
pub fn parse_document(source: &str) -> Result<ParsedDocument, FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let (first_line, rest) = match source.find('\n') {
        Some(pos) => (&source[..pos], &source[pos + 1..]),
        None => (source, ""),
    };

    let Some(format) = FrontMatterFormat::from_opening_line(first_line) else {
        return Ok(ParsedDocument {
            front_matter: FrontMatter::default(),
            body: source.to_string(),
        });
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if format.is_closing_line(line) {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let title = match format {
                FrontMatterFormat::Yaml => yaml_title(header)?,
                FrontMatterFormat::Toml => toml_title(header)?,
            };
            return Ok(ParsedDocument {
                front_matter: FrontMatter {
                    title,
                    format: Some(format),
                },
                body: body.to_string(),
            });
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated(format.fence()))
}

fn yaml_title(header: &str) -> Result<Option<String>, FrontMatterError> {
    use serde_yaml::Value;

    if header.trim().is_empty() {
        return Ok(None);
    }

    let mapping = match serde_yaml::from_str::<Value>(header)? {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(None),
        _ => return Err(FrontMatterError::NotAMapping),
    };

    match mapping.get("title") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(FrontMatterError::InvalidTitle),
    }
}

fn toml_title(header: &str) -> Result<Option<String>, FrontMatterError> {
    use toml::Value;

    let table: toml::Table = toml::from_str(header)?;

    match table.get("title") {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Integer(i)) => Ok(Some(i.to_string())),
        Some(Value::Float(f)) => Ok(Some(f.to_string())),
        Some(Value::Boolean(b)) => Ok(Some(b.to_string())),
        Some(Value::Datetime(d)) => Ok(Some(d.to_string())),
        Some(_) => Err(FrontMatterError::InvalidTitle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_no_front_matter() {
        let doc = parse_document("# Heading\n\nSome text.").unwrap();
        assert_eq!(doc.front_matter, FrontMatter::default());
        assert_eq!(doc.body, "# Heading\n\nSome text.");
    }

    #[test]
    fn test_yaml_title_and_body() {
        let doc = parse_document("---\ntitle: Getting Started\ndescription: intro\n---\nWelcome!\n").unwrap();
        assert_eq!(doc.front_matter.title.as_deref(), Some("Getting Started"));
        assert_eq!(doc.front_matter.format, Some(FrontMatterFormat::Yaml));
        assert_eq!(doc.body, "Welcome!\n");
    }

    #[test]
    fn test_yaml_without_title() {
        let doc = parse_document("---\ndescription: no title here\n---\nBody").unwrap();
        assert_eq!(doc.front_matter.title, None);
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_empty_yaml_block() {
        let doc = parse_document("---\n---\nBody").unwrap();
        assert_eq!(doc.front_matter.title, None);
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_crlf_and_bom() {
        let doc = parse_document("\u{feff}---\r\ntitle: Windows\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(doc.front_matter.title.as_deref(), Some("Windows"));
        assert_eq!(doc.body, "Body\r\n");
    }

    #[test]
    fn test_toml_front_matter() {
        let doc = parse_document("+++\ntitle = \"Config Reference\"\nweight = 3\n+++\nBody").unwrap();
        assert_eq!(doc.front_matter.title.as_deref(), Some("Config Reference"));
        assert_eq!(doc.front_matter.format, Some(FrontMatterFormat::Toml));
        assert_eq!(doc.body, "Body");
    }

    #[rstest]
    #[case("---\ntitle: 42\n---\n", "42")]
    #[case("---\ntitle: true\n---\n", "true")]
    #[case("---\ntitle: \"Quoted: colon\"\n---\n", "Quoted: colon")]
    fn test_scalar_titles(#[case] source: &str, #[case] expected: &str) {
        let doc = parse_document(source).unwrap();
        assert_eq!(doc.front_matter.title.as_deref(), Some(expected));
    }

    #[test]
    fn test_null_title_is_absent() {
        let doc = parse_document("---\ntitle:\n---\nBody").unwrap();
        assert_eq!(doc.front_matter.title, None);
    }

    #[test]
    fn test_closing_dots() {
        let doc = parse_document("---\ntitle: Dots\n...\nBody").unwrap();
        assert_eq!(doc.front_matter.title.as_deref(), Some("Dots"));
        assert_eq!(doc.body, "Body");
    }

    #[rstest]
    #[case("---\ntitle: never closed\nBody")]
    #[case("---")]
    #[case("+++\ntitle = \"x\"\n")]
    fn test_unterminated(#[case] source: &str) {
        assert!(matches!(
            parse_document(source),
            Err(FrontMatterError::Unterminated(_))
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = parse_document("---\ntitle: [unclosed\n---\nBody");
        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn test_yaml_not_a_mapping() {
        let result = parse_document("---\n- a\n- b\n---\nBody");
        assert!(matches!(result, Err(FrontMatterError::NotAMapping)));
    }

    #[test]
    fn test_structured_title_rejected() {
        let result = parse_document("---\ntitle:\n  nested: value\n---\nBody");
        assert!(matches!(result, Err(FrontMatterError::InvalidTitle)));
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_document("+++\ntitle = \n+++\nBody");
        assert!(matches!(result, Err(FrontMatterError::Toml(_))));
    }

    #[test]
    fn test_dashes_later_in_body_are_not_front_matter() {
        let doc = parse_document("Intro\n---\ntitle: nope\n---\n").unwrap();
        assert_eq!(doc.front_matter.title, None);
        assert!(doc.body.starts_with("Intro"));
    }
}
