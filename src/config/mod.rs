//! Configuration module for coursemap
//!
//! Handles loading, parsing and validating the optional TOML configuration
//! file. Every setting defaults to a working value, so the file only needs to
//! name what it overrides.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, RendererConfig, SiteConfig, StorageConfig};

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;
