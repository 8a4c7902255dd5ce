pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::path::PathBuf;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Location of the server configuration file inside the platform config dir.
pub fn server_config_path<S: AppStrategy>(strategy: &S) -> PathBuf {
    strategy.config_dir().join(constants::SERVER_CONFIG_FILE_NAME)
}

/// Name of the environment variable overriding `key`, e.g. `content_root` -> `DOCSEARCH_CONTENT_ROOT`.
pub fn env_key(key: &str) -> String {
    format!("{}_{}", constants::ENV_PREFIX, key.to_ascii_uppercase().replace('-', "_"))
}

/// Read an override for `key` from the environment, if set and not empty.
pub fn env_override(key: &str) -> Option<String> {
    env::var(env_key(key)).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key() {
        assert_eq!(env_key("content-root"), "DOCSEARCH_CONTENT_ROOT");
        assert_eq!(env_key("bind_address"), "DOCSEARCH_BIND_ADDRESS");
    }
}
