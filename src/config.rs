use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Public base URL of the server that owns plan locks.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RenderConfig {
    /// Attach the collapsible log section to every comment.
    #[serde(default)]
    pub verbose: bool,
}

fn default_url() -> String {
    "http://localhost:4141".to_string()
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Load from file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        } else {
            builder = builder.add_source(config::File::with_name("tfcomment").required(false));
        }

        // Environment variable overrides with TFCOMMENT_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("TFCOMMENT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::default();
        assert_eq!(config.server.url, "http://localhost:4141");
        assert!(!config.render.verbose);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nurl = \"https://locks.example.com\"\n\n[render]\nverbose = true"
        )
        .unwrap();

        let config = AppConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.server.url, "https://locks.example.com");
        assert!(config.render.verbose);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[render]\nverbose = true").unwrap();

        let config = AppConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.server.url, "http://localhost:4141");
        assert!(config.render.verbose);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(path.to_str()).is_err());
    }
}
