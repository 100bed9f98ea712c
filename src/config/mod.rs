pub mod sources;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::{HskError, HskResult};

pub use sources::{LevelSource, SourceConfig};

pub const SETTINGS_PATH: &str = "config/settings.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub crawler: CrawlerConfig,
    pub sources: SourceConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlerConfig {
    pub user_agent: String,
    pub accept: String,
    pub accept_charset: String,
    pub accept_encoding: String,
    pub accept_language: String,
    pub request_delay_ms: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_path: String,
}

impl AppConfig {
    /// 默认值 < config/settings.toml < HSKVOCAB__ 环境变量
    pub fn load() -> HskResult<Self> {
        Self::load_from(Path::new(SETTINGS_PATH))
    }

    pub fn load_from(path: &Path) -> HskResult<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("HSKVOCAB").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn save(&self, path: &str) -> HskResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HskError::ConfigError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig {
                user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.64 Safari/537.11".to_string(),
                accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
                accept_charset: "ISO-8859-1,utf-8;q=0.7,*;q=0.3".to_string(),
                accept_encoding: "identity".to_string(),
                accept_language: "en-US,en;q=0.8".to_string(),
                request_delay_ms: 500,
                timeout_secs: 60,
            },
            sources: SourceConfig::default(),
            export: ExportConfig {
                output_path: "hsk.csv".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Level;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        let levels: Vec<Level> = config.sources.pages.iter().map(|p| p.level).collect();
        assert_eq!(levels, Level::ALL[..6].to_vec());
        assert_eq!(config.export.output_path, "hsk.csv");
    }

    #[test]
    fn saved_file_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut config = AppConfig::default();
        config.sources.pages[1].url = "http://localhost/hsk2.html".to_string();
        config.sources.document_path = "data/upper.pdf".to_string();
        config.save(path.to_str().unwrap()).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.sources.pages.len(), 6);
        assert_eq!(loaded.sources.pages[1].level, Level::Hsk2);
        assert_eq!(loaded.sources.pages[1].url, "http://localhost/hsk2.html");
        assert_eq!(loaded.sources.document_path, "data/upper.pdf");
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        AppConfig::default().save(path.to_str().unwrap()).unwrap();

        std::env::set_var("HSKVOCAB__CRAWLER__TIMEOUT_SECS", "7");
        let loaded = AppConfig::load_from(&path);
        std::env::remove_var("HSKVOCAB__CRAWLER__TIMEOUT_SECS");

        let loaded = loaded.unwrap();
        assert_eq!(loaded.crawler.timeout_secs, 7);
        assert_eq!(loaded.crawler.request_delay_ms, 500);
    }
}
