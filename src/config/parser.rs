use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use coursemap::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Data dir: {}", config.storage.data_dir);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndata-dir = \"scraped\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.storage.data_dir, "scraped");
        // Untouched sections keep their defaults
        assert_eq!(config.site.base_url, "https://www.datacamp.com");
        assert_eq!(config.renderer.request_timeout_secs, 30);
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(
            config.site.listing_url,
            "https://www.datacamp.com/tracks/career"
        );
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not toml [").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_config(Path::new("/nonexistent/config.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
