mod tree_config;

pub use tree_config::{CollationConfig, ConfigError, TreeConfig};
