use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Twitter 應用程式的 consumer key / secret。
///
/// 兩者都視為不透明字串，`Debug` 不會輸出原值。
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
}

impl Credentials {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Result<Self> {
        let credentials = Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("consumer_key", &self.consumer_key)?;
        validate_non_empty_string("consumer_secret", &self.consumer_secret)?;
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"[REDACTED]")
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

/// 每個 adapter 在建立時取得的唯一識別碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdapterId(u64);

static NEXT_ADAPTER_ID: AtomicU64 = AtomicU64::new(1);

impl AdapterId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ADAPTER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AdapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "twitter-adapter-{}", self.0)
    }
}
