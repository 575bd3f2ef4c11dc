//! Language table configuration loaded from TOML.

pub mod loader;
pub mod schema;

pub use loader::{default_path, load_from_path, load_from_str, resolve_path, ConfigError, CONFIG_ENV};
pub use schema::{LanguageEntry, LanguagesConfig, ValidationError, ValidationIssue};
