use crate::domain::model::{AdapterId, Credentials};
use crate::domain::ports::AdapterFactory;
use crate::utils::error::{AdapterError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Twitter adapter handle.
///
/// 目前只提供識別 (identity)：同樣的參數建立兩次會得到兩個不相等的 handle，
/// clone 出來的 handle 則與原本的相等。
#[derive(Clone)]
pub struct TwitterAdapter {
    inner: Arc<AdapterInner>,
}

struct AdapterInner {
    id: AdapterId,
    credentials: Credentials,
    // 之後真正的非同步工作會排在這個 runtime 上
    scheduler: Handle,
}

impl TwitterAdapter {
    pub fn new(credentials: Credentials, scheduler: Handle) -> Self {
        let id = AdapterId::next();
        tracing::debug!(adapter_id = %id, "Constructed Twitter adapter");

        Self {
            inner: Arc::new(AdapterInner {
                id,
                credentials,
                scheduler,
            }),
        }
    }

    pub fn id(&self) -> AdapterId {
        self.inner.id
    }
}

impl PartialEq for TwitterAdapter {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for TwitterAdapter {}

impl Hash for TwitterAdapter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for TwitterAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterAdapter")
            .field("id", &self.inner.id)
            .field("credentials", &self.inner.credentials)
            .field("runtime_flavor", &self.inner.scheduler.runtime_flavor())
            .finish()
    }
}

/// 驗證憑證後建立 adapter；空字串的 key 或 secret 會回傳 `ConfigurationError`。
pub fn construct(
    consumer_key: &str,
    consumer_secret: &str,
    scheduler: Handle,
) -> Result<TwitterAdapter> {
    let credentials = Credentials::new(consumer_key, consumer_secret)?;
    Ok(TwitterAdapter::new(credentials, scheduler))
}

/// 綁定一個 runtime 的 factory，可透過 `AdapterFactory` port 注入
#[derive(Debug, Clone)]
pub struct TwitterAdapterFactory {
    scheduler: Handle,
}

impl TwitterAdapterFactory {
    pub fn new(scheduler: Handle) -> Self {
        Self { scheduler }
    }

    /// 使用目前所在的 tokio runtime；不在 runtime 內時回傳 `SchedulerUnavailable`
    pub fn try_current() -> Result<Self> {
        let scheduler = Handle::try_current().map_err(|e| AdapterError::SchedulerUnavailable {
            message: e.to_string(),
        })?;
        Ok(Self::new(scheduler))
    }
}

impl AdapterFactory for TwitterAdapterFactory {
    type Adapter = TwitterAdapter;

    fn construct(&self, credentials: Credentials) -> Result<TwitterAdapter> {
        Ok(TwitterAdapter::new(credentials, self.scheduler.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_construct_returns_handle() {
        let adapter = construct("key", "secret", Handle::current()).unwrap();
        assert!(adapter.id().as_u64() > 0);
    }

    #[tokio::test]
    async fn test_construct_rejects_empty_credentials() {
        let err = construct("", "secret", Handle::current()).unwrap_err();
        assert!(matches!(err, AdapterError::ConfigurationError { .. }));

        let err = construct("key", "", Handle::current()).unwrap_err();
        assert!(matches!(err, AdapterError::ConfigurationError { .. }));
    }

    #[tokio::test]
    async fn test_identical_inputs_give_distinct_handles() {
        let first = construct("key", "secret", Handle::current()).unwrap();
        let second = construct("key", "secret", Handle::current()).unwrap();

        assert_ne!(first, second);
        assert_eq!(first, first.clone());

        let set: HashSet<_> = [first.clone(), second, first].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn test_debug_hides_secrets() {
        let adapter = construct("visible-key", "visible-secret", Handle::current()).unwrap();
        let debug = format!("{:?}", adapter);

        assert!(debug.contains("TwitterAdapter"));
        assert!(!debug.contains("visible-key"));
        assert!(!debug.contains("visible-secret"));
    }

    #[tokio::test]
    async fn test_factory_uses_bound_runtime() {
        let factory = TwitterAdapterFactory::try_current().unwrap();
        let credentials = Credentials::new("key", "secret").unwrap();

        let first = factory.construct(credentials.clone()).unwrap();
        let second = factory.construct(credentials).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_factory_outside_runtime_is_an_error() {
        let err = TwitterAdapterFactory::try_current().unwrap_err();
        assert!(matches!(err, AdapterError::SchedulerUnavailable { .. }));
    }
}
