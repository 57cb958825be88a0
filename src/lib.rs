pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::twitter::{construct, TwitterAdapter, TwitterAdapterFactory};
pub use config::{AdapterConfig, TwitterSection};
pub use domain::model::{AdapterId, Credentials};
pub use domain::ports::{AdapterFactory, CredentialsProvider};
pub use utils::error::{AdapterError, Result};
