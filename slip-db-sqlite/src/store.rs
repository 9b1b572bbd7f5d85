use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use slip_core::{CommodityRecord, NewCommodityRecord, RecordStore, StoreError};
use sqlx::{FromRow, sqlite::SqlitePool};

/// SQLite-backed [`RecordStore`].
///
/// Decimals are stored as TEXT so weights and amounts round-trip exactly.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn get_record(&self, id: i64) -> Result<CommodityRecord, StoreError> {
        let row: CommodityRecordRow = sqlx::query_as(
            "SELECT id, commodity_type, weight, rate, total, section, customer_name, created_at
             FROM commodity_records WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        row.try_into()
    }
}

#[derive(FromRow)]
struct CommodityRecordRow {
    id: i64,
    commodity_type: String,
    weight: String,
    rate: String,
    total: String,
    section: String,
    customer_name: String,
    created_at: String,
}

impl TryFrom<CommodityRecordRow> for CommodityRecord {
    type Error = StoreError;

    fn try_from(row: CommodityRecordRow) -> Result<Self, Self::Error> {
        Ok(CommodityRecord {
            id: row.id,
            commodity_type: row.commodity_type,
            weight: parse_decimal(&row.weight)?,
            rate: parse_decimal(&row.rate)?,
            total: parse_decimal(&row.total)?,
            section: row.section,
            customer_name: row.customer_name,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, StoreError> {
    s.parse::<Decimal>()
        .map_err(|e| StoreError::Database(format!("Failed to parse decimal '{}': {}", s, e)))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| StoreError::Database(format!("Failed to parse datetime '{}': {}", s, e)))
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn create_record(
        &self,
        record: NewCommodityRecord,
    ) -> Result<CommodityRecord, StoreError> {
        let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query(
            "INSERT INTO commodity_records
                (commodity_type, weight, rate, total, section, customer_name, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.commodity_type)
        .bind(record.weight.to_string())
        .bind(record.rate.to_string())
        .bind(record.total.to_string())
        .bind(&record.section)
        .bind(&record.customer_name)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, section = %record.section, "record created");
        self.get_record(id).await
    }
}
