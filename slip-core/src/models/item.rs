use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Section;

/// A finalized row on the slip.
///
/// Created by committing the draft entry and never mutated afterwards;
/// the only way out of the list is explicit removal by id. Piece-count
/// rows are committed with `weight == 0` so a count of pieces never leaks
/// into the weight aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedItem {
    /// Session-unique id used for removal.
    pub id: u64,
    pub section: Section,
    pub item_date: NaiveDate,
    /// Size grade ("10/20") or piece count ("4") exactly as entered.
    pub label: String,
    pub weight: Decimal,
    pub rate: Decimal,
    pub total: Decimal,
}
