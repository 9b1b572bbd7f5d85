use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Section;
use crate::numeric::parse_optional_decimal;

/// The fields of the draft entry addressable through
/// [`ReceiptSession::update_field`](crate::ReceiptSession::update_field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryField {
    Label,
    Weight,
    Rate,
    Total,
}

/// How the label of a draft entry is interpreted.
///
/// A label that parses entirely as a number is a piece count ("4" means
/// four pieces); anything else is a size grade ("10/20"). The mode changes
/// how weight, rate and total relate: in piece-count mode the weight input
/// doubles as the per-piece rate entry and the committed row carries zero
/// weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    PieceCount(Decimal),
    SizeGrade,
}

/// The single live editable row of the entry form.
///
/// Numeric fields hold `None` when empty or unparsable; bad input is
/// degraded, never an error and never NaN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub section: Section,
    pub item_date: NaiveDate,
    pub label: String,
    pub weight: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub total: Option<Decimal>,
}

impl DraftEntry {
    pub fn new(section: Section, item_date: NaiveDate) -> Self {
        Self {
            section,
            item_date,
            label: String::new(),
            weight: None,
            rate: None,
            total: None,
        }
    }

    /// Re-derives the entry mode from the current label.
    ///
    /// Recomputed on every call rather than cached: the classification must
    /// track label edits exactly.
    pub fn mode(&self) -> EntryMode {
        match parse_optional_decimal(&self.label) {
            Some(count) => EntryMode::PieceCount(count),
            None => EntryMode::SizeGrade,
        }
    }

    /// Clears label, weight, rate and total, keeping section and date for
    /// the next row.
    pub fn reset_values(&mut self) {
        self.label.clear();
        self.weight = None;
        self.rate = None;
        self.total = None;
    }
}
