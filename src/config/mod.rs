pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::CredentialsProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, Validate, LOG_LEVELS};
#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::{AdapterConfig, TwitterSection, CONSUMER_KEY_ENV, CONSUMER_SECRET_ENV};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "twitter-adapter")]
#[command(about = "Validate Twitter credentials and construct an adapter")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Falls back to the config file, then TWITTER_CONSUMER_KEY
    #[arg(long)]
    pub consumer_key: Option<String>,

    /// Falls back to the config file, then TWITTER_CONSUMER_SECRET
    #[arg(long)]
    pub consumer_secret: Option<String>,

    #[arg(long, help = "Log level: trace, debug, info, warn or error")]
    pub log_level: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 依序套用設定來源：命令列參數 > 設定檔 > 環境變數
    pub fn resolve(self) -> Result<Self> {
        self.resolve_with_env(TwitterSection::from_env())
    }

    pub fn resolve_with_env(mut self, env: TwitterSection) -> Result<Self> {
        if let Some(path) = self.config.clone() {
            let file = AdapterConfig::from_file(&path)?;
            file.validate()?;

            if self.consumer_key.is_none() {
                self.consumer_key = file.twitter.consumer_key.clone();
            }
            if self.consumer_secret.is_none() {
                self.consumer_secret = file.twitter.consumer_secret.clone();
            }
            if self.log_level.is_none() {
                self.log_level = file.log_level().map(str::to_string);
            }
            self.json_logs = self.json_logs || file.json_logs();
        }

        if self.consumer_key.is_none() {
            self.consumer_key = env.consumer_key;
        }
        if self.consumer_secret.is_none() {
            self.consumer_secret = env.consumer_secret;
        }

        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, &LOG_LEVELS)?;
        }

        Ok(self)
    }
}

#[cfg(feature = "cli")]
impl CredentialsProvider for CliConfig {
    fn consumer_key(&self) -> Option<&str> {
        self.consumer_key.as_deref()
    }

    fn consumer_secret(&self) -> Option<&str> {
        self.consumer_secret.as_deref()
    }
}
