use std::collections::HashMap;

use async_trait::async_trait;

use super::store::{RecordStore, StoreError};

/// Backend-agnostic connection configuration.
///
/// `backend` must match the [`StoreFactory::backend_name`] of a registered
/// factory. `connection_string` is passed through to that factory
/// unchanged — its meaning is entirely backend-specific.
///
/// | backend  | connection_string examples          |
/// |----------|-------------------------------------|
/// | `sqlite` | `slip.db`, `sqlite::memory:`        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"sqlite"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub connection_string: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: "sqlite::memory:".to_string(),
        }
    }
}

/// One implementation per storage backend. Each backend crate exports a
/// single unit struct that implements this trait and is registered with a
/// [`StoreRegistry`] at startup.
#[async_trait]
pub trait StoreFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) a connection and return a ready-to-use store.
    /// Implementations are free to run migrations or warm connection
    /// pools inside this method.
    async fn create(&self, config: &StoreConfig) -> Result<Box<dyn RecordStore>, StoreError>;
}

/// Registry of [`StoreFactory`] instances, keyed by backend name.
pub struct StoreRegistry {
    factories: HashMap<&'static str, Box<dyn StoreFactory>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a backend factory. A factory with the same
    /// [`StoreFactory::backend_name`] is silently replaced.
    pub fn register(&mut self, factory: Box<dyn StoreFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatches to the factory matching `config.backend` and returns the
    /// store it produces.
    ///
    /// # Errors
    /// * [`StoreError::Configuration`] — no factory is registered for the
    ///   requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(&self, config: &StoreConfig) -> Result<Box<dyn RecordStore>, StoreError> {
        let factory = self.factories.get(config.backend.as_str()).ok_or_else(|| {
            StoreError::Configuration(format!(
                "unknown backend '{}'; available: {:?}",
                config.backend,
                self.available_backends()
            ))
        })?;

        factory.create(config).await
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use crate::models::{CommodityRecord, NewCommodityRecord};

    use super::*;

    struct StubStore;

    #[async_trait]
    impl RecordStore for StubStore {
        async fn create_record(
            &self,
            _record: NewCommodityRecord,
        ) -> Result<CommodityRecord, StoreError> {
            unimplemented!("registry tests never save records")
        }
    }

    /// Flips an `AtomicBool` when `create` is called, so tests can prove
    /// the registry routed to the right factory.
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl StoreFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn create(
            &self,
            _config: &StoreConfig,
        ) -> Result<Box<dyn RecordStore>, StoreError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubStore))
        }
    }

    struct FailingFactory;

    #[async_trait]
    impl StoreFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }
        async fn create(
            &self,
            _config: &StoreConfig,
        ) -> Result<Box<dyn RecordStore>, StoreError> {
            Err(StoreError::Connection("intentional failure".to_string()))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn StoreFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    #[test]
    fn default_config_is_in_memory_sqlite() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.backend, "sqlite");
        assert_eq!(cfg.connection_string, "sqlite::memory:");
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = StoreRegistry::new();
        let (f1, _) = stub_factory("sqlite");
        let (f2, _) = stub_factory("postgres");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["postgres", "sqlite"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = StoreRegistry::new();
        let (old, _) = stub_factory("sqlite");
        let (new, _) = stub_factory("sqlite");
        reg.register(old);
        reg.register(new);
        assert_eq!(reg.available_backends(), vec!["sqlite"]);
    }

    #[tokio::test]
    async fn create_calls_matching_factory() {
        let mut reg = StoreRegistry::new();
        let (factory, called) = stub_factory("sqlite");
        reg.register(factory);

        let result = reg.create(&StoreConfig::default()).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(called.load(Ordering::SeqCst), "factory create not invoked");
    }

    #[tokio::test]
    async fn unknown_backend_names_requested_and_available() {
        let mut reg = StoreRegistry::new();
        let (f, _) = stub_factory("sqlite");
        reg.register(f);

        let config = StoreConfig {
            backend: "postgres".to_string(),
            connection_string: "x".to_string(),
        };

        match reg.create(&config).await.err() {
            Some(StoreError::Configuration(msg)) => {
                assert!(msg.contains("postgres"));
                assert!(msg.contains("sqlite"));
            }
            other => panic!("expected Configuration error, got {other:#?}"),
        }
    }

    #[tokio::test]
    async fn create_propagates_factory_error() {
        let mut reg = StoreRegistry::new();
        reg.register(Box::new(FailingFactory));

        let config = StoreConfig {
            backend: "failing".to_string(),
            connection_string: "x".to_string(),
        };

        assert_eq!(
            reg.create(&config).await.err(),
            Some(StoreError::Connection("intentional failure".to_string()))
        );
    }
}
