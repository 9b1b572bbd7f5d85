use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored commodity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommodityRecord {
    pub id: i64,
    pub commodity_type: String,
    pub weight: Decimal,
    pub rate: Decimal,
    pub total: Decimal,
    pub section: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
}

/// A commodity record about to be saved (no id or timestamp yet).
///
/// `commodity_type` carries the item date and label joined as
/// `"YYYY-MM-DD - label"`; `section` is the display label of the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommodityRecord {
    pub commodity_type: String,
    pub weight: Decimal,
    pub rate: Decimal,
    pub total: Decimal,
    pub section: String,
    pub customer_name: String,
}
