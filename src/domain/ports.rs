use crate::domain::model::Credentials;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;

/// 由憑證建立 adapter 的抽象介面
pub trait AdapterFactory: Send + Sync {
    type Adapter: Send + Sync;

    fn construct(&self, credentials: Credentials) -> Result<Self::Adapter>;
}

/// 任何能提供 consumer key / secret 的設定來源 (CLI, TOML, 環境變數)
pub trait CredentialsProvider: Send + Sync {
    fn consumer_key(&self) -> Option<&str>;
    fn consumer_secret(&self) -> Option<&str>;

    fn credentials(&self) -> Result<Credentials> {
        let key = self.consumer_key();
        let secret = self.consumer_secret();
        let key = validate_required_field("consumer_key", &key)?;
        let secret = validate_required_field("consumer_secret", &secret)?;
        Credentials::new(*key, *secret)
    }
}
