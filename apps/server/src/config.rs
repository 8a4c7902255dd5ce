use crate::error::{Result, WrapErr};
use ::config::{create_strategy, env_override, server_config_path};
use search_core::{IndexConfig, RankingConfig, SearchConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// Directory holding the content documents
    pub content_root: PathBuf,
    pub bind_address: SocketAddr,
    /// Content file extension, without the dot
    pub content_extension: String,
    pub docs_prefix: String,
    pub max_results: usize,
    pub excerpt_length: usize,
}

fn default_config() -> Config {
    let search = SearchConfig::default();

    Config {
        content_root: search.content_root,
        bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
        content_extension: search.index.content_extension,
        docs_prefix: search.ranking.docs_prefix,
        max_results: search.ranking.max_results,
        excerpt_length: search.index.excerpt_length,
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// Load from `path`, or from the platform config dir when no path is given.
    /// Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config = match path {
            Some(path) => {
                let user_config_str = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Cannot read config file {}", path.display()))?;
                Self::load_str(&user_config_str)
                    .wrap_err_with(|| format!("Invalid config file {}", path.display()))?
            }
            None => Self::load_default_location()?,
        };

        config.with_env_overrides()
    }

    fn load_default_location() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = server_config_path(&strategy);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid config file {}", config_path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Err(e) = Self::create_example_config(&config_path) {
                    tracing::warn!("Could not write example config {}: {}", config_path.display(), e);
                }
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn with_env_overrides(self) -> Result<Config> {
        self.with_overrides(env_override)
    }

    /// Apply overrides for `content-root` and `bind-address` looked up by key.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        if let Some(content_root) = lookup("content-root") {
            self.content_root = PathBuf::from(content_root);
        }
        if let Some(bind_address) = lookup("bind-address") {
            self.bind_address = bind_address
                .parse()
                .wrap_err_with(|| format!("Invalid bind address '{}'", bind_address))?;
        }
        Ok(self)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            content_root: self.content_root.clone(),
            index: IndexConfig {
                content_extension: self.content_extension.clone(),
                excerpt_length: self.excerpt_length,
                ..Default::default()
            },
            ranking: RankingConfig {
                docs_prefix: self.docs_prefix.clone(),
                max_results: self.max_results,
            },
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# docsearch server configuration
#
# Created on first run. Restart the server after editing.

# Directory containing the content documents
# content-root = "./contents"

# Address the HTTP endpoint listens on
# bind-address = "127.0.0.1:3000"

# Only files with this extension are indexed
# content-extension = "mdx"

# Documents whose path starts with this prefix rank higher
# docs-prefix = "/docs"

# max-results = 10
# excerpt-length = 150
"#;

        std::fs::write(config_path, example_config)?;
        tracing::info!("Created example config file {}", config_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = Config::load_str("").unwrap();
        assert_eq!(cfg.content_root, PathBuf::from("./contents"));
        assert_eq!(cfg.bind_address, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(cfg.max_results, 10);
    }

    #[test]
    fn test_partial_config() {
        let cfg = Config::load_str(
            r#"
content-root = "/srv/site/contents"
docs-prefix = "/guide"
max-results = 5
"#,
        )
        .unwrap();

        assert_eq!(cfg.content_root, PathBuf::from("/srv/site/contents"));
        assert_eq!(cfg.docs_prefix, "/guide");
        assert_eq!(cfg.max_results, 5);
        assert_eq!(cfg.content_extension, "mdx");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::load_str("watch-paths = []").is_err());
    }

    #[test]
    fn test_search_config_mapping() {
        let cfg = Config::load_str("content-extension = \"md\"\nexcerpt-length = 80").unwrap();
        let search = cfg.search_config();

        assert_eq!(search.index.content_extension, "md");
        assert_eq!(search.index.excerpt_length, 80);
        assert_eq!(search.index.excerpt_marker, "...");
        assert_eq!(search.ranking.docs_prefix, "/docs");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "bind-address = \"0.0.0.0:8080\"").unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.bind_address.port(), 8080);
        assert_eq!(cfg.max_results, 10);

        std::fs::write(&path, "max-results = \"ten\"").unwrap();
        assert!(Config::load(Some(&path)).is_err());

        let missing = dir.path().join("missing.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cfg = Config::load_str("content-root = \"/from/file\"").unwrap();
        let cfg = cfg
            .with_overrides(|key| match key {
                "content-root" => Some("/from/env".to_string()),
                "bind-address" => Some("0.0.0.0:9000".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(cfg.content_root, PathBuf::from("/from/env"));
        assert_eq!(cfg.bind_address, SocketAddr::from(([0, 0, 0, 0], 9000)));
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let cfg = Config::load_str("content-root = \"/from/file\"").unwrap();
        let cfg = cfg.with_overrides(|_| None).unwrap();

        assert_eq!(cfg.content_root, PathBuf::from("/from/file"));
        assert_eq!(cfg.bind_address.port(), 3000);
    }

    #[test]
    fn test_invalid_bind_address_override() {
        let result = Config::default().with_overrides(|key| (key == "bind-address").then(|| "not-an-address".to_string()));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("not-an-address"));
    }
}
