use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CommodityRecord, NewCommodityRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Where committed slip rows end up.
///
/// The calculator consumes a single operation: create one record per
/// committed item. Batch semantics (parallel dispatch, all-or-nothing
/// reporting) live in [`crate::db::batch`], on top of this trait.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_record(
        &self,
        record: NewCommodityRecord,
    ) -> Result<CommodityRecord, StoreError>;
}
