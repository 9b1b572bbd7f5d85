//! All-or-nothing batch persistence.

use futures::future::try_join_all;

use crate::db::store::{RecordStore, StoreError};
use crate::models::{CommodityRecord, NewCommodityRecord};

/// Saves every record through `store`, fanning the requests out in
/// parallel with no ordering guarantee between them.
///
/// The batch either fully succeeds or fails with the first error; no
/// partial-success bookkeeping is kept and nothing is retried, so a
/// failed batch may still have created some records on the remote side.
/// An empty batch succeeds without touching the store.
pub async fn save_batch(
    store: &dyn RecordStore,
    records: Vec<NewCommodityRecord>,
) -> Result<Vec<CommodityRecord>, StoreError> {
    let count = records.len();
    if count == 0 {
        return Ok(Vec::new());
    }

    let saved = try_join_all(
        records
            .into_iter()
            .map(|record| store.create_record(record)),
    )
    .await?;

    tracing::info!(count, "batch saved");
    Ok(saved)
}
