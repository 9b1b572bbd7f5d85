use async_trait::async_trait;

use slip_core::db::{StoreConfig, StoreFactory};
use slip_core::{RecordStore, StoreError};

use crate::store::SqliteStore;

/// [`StoreFactory`] for SQLite.
///
/// Register this with a [`slip_core::db::StoreRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use slip_core::db::StoreRegistry;
/// use slip_db_sqlite::SqliteStoreFactory;
///
/// let mut registry = StoreRegistry::new();
/// registry.register(Box::new(SqliteStoreFactory));
/// ```
pub struct SqliteStoreFactory;

#[async_trait]
impl StoreFactory for SqliteStoreFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Opens the database described by `config.connection_string` and runs
    /// migrations before handing the store out.
    ///
    /// Accepted connection strings are whatever sqlx's SQLite driver
    /// accepts, e.g. `sqlite:slip.db?mode=rwc` or `sqlite::memory:`.
    async fn create(&self, config: &StoreConfig) -> Result<Box<dyn RecordStore>, StoreError> {
        let store = SqliteStore::new(&config.connection_string).await?;
        store.run_migrations().await?;
        Ok(Box::new(store))
    }
}
