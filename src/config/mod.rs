pub mod cli;
pub mod config;

pub use self::cli::{Cli, USAGE};
pub use self::config::{load_config, AppConfig, SelectorConfig};
