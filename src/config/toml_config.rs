use crate::domain::ports::CredentialsProvider;
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate, LOG_LEVELS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONSUMER_KEY_ENV: &str = "TWITTER_CONSUMER_KEY";
pub const CONSUMER_SECRET_ENV: &str = "TWITTER_CONSUMER_SECRET";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub twitter: TwitterSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwitterSection {
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
}

impl TwitterSection {
    /// 從環境變數讀取憑證，沒設的欄位保持 `None`
    pub fn from_env() -> Self {
        Self {
            consumer_key: std::env::var(CONSUMER_KEY_ENV).ok(),
            consumer_secret: std::env::var(CONSUMER_SECRET_ENV).ok(),
        }
    }
}

impl CredentialsProvider for TwitterSection {
    fn consumer_key(&self) -> Option<&str> {
        self.consumer_key.as_deref()
    }

    fn consumer_secret(&self) -> Option<&str> {
        self.consumer_secret.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl AdapterConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdapterError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TWITTER_CONSUMER_KEY})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdapterError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl CredentialsProvider for AdapterConfig {
    fn consumer_key(&self) -> Option<&str> {
        self.twitter.consumer_key()
    }

    fn consumer_secret(&self) -> Option<&str> {
        self.twitter.consumer_secret()
    }
}

impl Validate for AdapterConfig {
    fn validate(&self) -> Result<()> {
        // 值可以缺 (之後由 CLI 參數補上)，但有給就不能是空字串
        if let Some(key) = &self.twitter.consumer_key {
            validate_non_empty_string("twitter.consumer_key", key)?;
        }
        if let Some(secret) = &self.twitter.consumer_secret {
            validate_non_empty_string("twitter.consumer_secret", secret)?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
