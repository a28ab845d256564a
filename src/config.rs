use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use style_advisor_common::StylePreference;

pub const SERVER_ENV_VAR: &str = "STYLE_ADVISOR_SERVER";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub default_style: StylePreference,
    /// 未設定ならタイムアウトなし（ブラウザ版と同じ）
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            default_style: StylePreference::Auto,
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdvisorError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("style-advisor").join("config.json"))
    }

    /// サーバーURL（環境変数を優先）
    pub fn server_url(&self) -> String {
        match std::env::var(SERVER_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.server_url.clone(),
        }
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AdvisorError::Config(format!(
                "server URL must start with http:// or https://: {}",
                url
            )));
        }
        self.server_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
