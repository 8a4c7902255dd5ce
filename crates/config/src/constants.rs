pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "docsearch";
pub const APP_NAME: &str = "docsearch";

pub const SERVER_CONFIG_FILE_NAME: &str = "server.toml";

/// Prefix for environment variables that override configuration keys.
pub const ENV_PREFIX: &str = "DOCSEARCH";
