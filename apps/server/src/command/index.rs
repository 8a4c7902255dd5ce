use super::Command;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_core::build_index;
use std::path::PathBuf;

pub struct IndexCommand {
    config: Config,
    root_path: Option<PathBuf>,
}

impl IndexCommand {
    pub fn new(cfg: Config, root_path: Option<PathBuf>) -> Self {
        Self {
            config: cfg,
            root_path
        }
    }
}

#[async_trait::async_trait]
impl Command for IndexCommand {
    async fn execute(&self) -> Result<()> {
        let mut search_config = self.config.search_config();
        if let Some(root_path) = &self.root_path {
            search_config.content_root = root_path.clone();
        }

        let index = tokio::task::spawn_blocking(move || build_index(&search_config))
            .await?
            .wrap_err("Indexing failed")?;

        for document in index.documents() {
            println!("{:<40} {}", document.path, document.title);
        }
        println!(
            "\nIndexed {} documents from {} ({} skipped)",
            index.len(),
            index.content_root().display(),
            index.skipped()
        );

        Ok(())
    }
}
