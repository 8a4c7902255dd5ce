use super::Command;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_core::{SearchEngine, render_highlighted};
use std::io::IsTerminal;
use std::path::PathBuf;

pub struct SearchCommand {
    config: Config,
    query: String,
    content_root: Option<PathBuf>,
}

impl SearchCommand {
    pub fn new(cfg: Config, query: String, content_root: Option<PathBuf>) -> Self {
        Self {
            config: cfg,
            query,
            content_root,
        }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let mut search_config = self.config.search_config();
        if let Some(content_root) = &self.content_root {
            search_config.content_root = content_root.clone();
        }

        let engine = SearchEngine::new(search_config);
        let query = self.query.clone();
        let results = tokio::task::spawn_blocking(move || engine.search(&query))
            .await?
            .wrap_err("Search failed")?;

        if results.is_empty() {
            println!("No matching documents");
            return Ok(());
        }

        let (open, close) = if std::io::stdout().is_terminal() {
            ("\x1b[1;33m", "\x1b[0m")
        } else {
            ("**", "**")
        };

        for result in results {
            println!(
                "[{}] (Score: {})\n    {}\n    {}",
                render_highlighted(&result.title, &self.query, open, close),
                result.relevance,
                result.path,
                render_highlighted(&result.excerpt, &self.query, open, close),
            );
        }

        Ok(())
    }
}
