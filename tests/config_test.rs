use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::runtime::Handle;
use twitter_adapter::utils::validation::Validate;
use twitter_adapter::{
    AdapterConfig, AdapterError, AdapterFactory, CredentialsProvider, TwitterAdapterFactory,
    TwitterSection,
};

#[tokio::test]
async fn test_config_file_to_adapter() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[twitter]
consumer_key = "file-key"
consumer_secret = "file-secret"

[logging]
level = "info"
"#,
    )?;

    let config = AdapterConfig::from_file(temp_file.path())?;
    config.validate()?;

    let factory = TwitterAdapterFactory::new(Handle::current());
    let adapter = factory.construct(config.credentials()?)?;

    let debug = format!("{:?}", adapter);
    assert!(!debug.contains("file-secret"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = AdapterConfig::from_file("/definitely/not/here/twitter.toml").unwrap_err();
    assert!(matches!(err, AdapterError::IoError(_)));
}

#[test]
fn test_credentials_from_environment() {
    std::env::remove_var("TWITTER_CONSUMER_KEY");
    std::env::remove_var("TWITTER_CONSUMER_SECRET");

    let err = TwitterSection::from_env().credentials().unwrap_err();
    assert!(matches!(err, AdapterError::MissingConfigError { ref field } if field == "consumer_key"));

    std::env::set_var("TWITTER_CONSUMER_KEY", "env-key");
    let err = TwitterSection::from_env().credentials().unwrap_err();
    assert!(matches!(err, AdapterError::MissingConfigError { ref field } if field == "consumer_secret"));

    std::env::set_var("TWITTER_CONSUMER_SECRET", "env-secret");
    let credentials = TwitterSection::from_env().credentials().unwrap();
    assert_eq!(credentials.consumer_key(), "env-key");
    assert_eq!(credentials.consumer_secret(), "env-secret");

    // 環境變數有設但是空字串
    std::env::set_var("TWITTER_CONSUMER_SECRET", "");
    assert!(matches!(
        TwitterSection::from_env().credentials(),
        Err(AdapterError::ConfigurationError { .. })
    ));

    std::env::remove_var("TWITTER_CONSUMER_KEY");
    std::env::remove_var("TWITTER_CONSUMER_SECRET");
}
