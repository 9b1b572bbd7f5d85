//! The entry-form calculator session.
//!
//! One [`ReceiptSession`] owns the live draft row, the committed list and
//! the purchase amount. Every operation runs to completion on the calling
//! thread in response to a discrete edit; nothing here fails — bad numeric
//! input degrades to absent or zero (see [`crate::numeric`]).

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    CommittedItem, DraftEntry, EntryField, EntryMode, NewCommodityRecord, Section, SectionGroup,
    group_by_section,
};
use crate::numeric::parse_optional_decimal;

/// Customer name stored with saved records when none was entered.
const UNKNOWN_CUSTOMER: &str = "Unknown";

/// A receipt-entry session: draft entry, committed items and slip-level
/// inputs, with aggregates derived on every read.
#[derive(Debug, Clone)]
pub struct ReceiptSession {
    draft: DraftEntry,
    items: Vec<CommittedItem>,
    purchase_amount: Option<Decimal>,
    customer_name: String,
    next_id: u64,
}

impl ReceiptSession {
    /// Starts an empty session dated today, on the first section.
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    /// Starts an empty session with an explicit item date.
    pub fn starting_on(item_date: NaiveDate) -> Self {
        Self {
            draft: DraftEntry::new(Section::default(), item_date),
            items: Vec::new(),
            purchase_amount: None,
            customer_name: String::new(),
            next_id: 1,
        }
    }

    // ── draft edits ──────────────────────────────────────────────────────

    pub fn set_section(&mut self, section: Section) {
        self.draft.section = section;
    }

    pub fn set_item_date(&mut self, date: NaiveDate) {
        self.draft.item_date = date;
    }

    pub fn set_customer_name(&mut self, name: &str) {
        self.customer_name = name.trim().to_string();
    }

    /// Records the purchase amount; unparsable or empty input is absent
    /// and counts as zero in the profit/loss.
    pub fn set_purchase_amount(&mut self, raw: &str) {
        self.purchase_amount = parse_numeric_input(raw);
    }

    /// Applies one edit to the draft and re-derives the dependent fields.
    ///
    /// Exactly one of the two derivations runs per edit, chosen by the
    /// edited field: label/weight/rate edits forward-derive the total,
    /// a total edit back-solves the rate. In piece-count mode the weight
    /// input doubles as the per-piece rate entry, so a weight edit is
    /// mirrored into the rate before deriving, and a back-solved rate is
    /// mirrored back into the weight.
    pub fn update_field(&mut self, field: EntryField, raw: &str) {
        match field {
            EntryField::Label => {
                self.draft.label = raw.to_string();
                self.forward_derive();
            }
            EntryField::Weight => {
                let parsed = parse_numeric_input(raw);
                self.draft.weight = parsed;
                if !raw.trim().is_empty()
                    && matches!(self.draft.mode(), EntryMode::PieceCount(_))
                {
                    self.draft.rate = parsed;
                }
                self.forward_derive();
            }
            EntryField::Rate => {
                self.draft.rate = parse_numeric_input(raw);
                self.forward_derive();
            }
            EntryField::Total => {
                self.draft.total = parse_numeric_input(raw);
                self.reverse_derive();
            }
        }
    }

    /// Forward derivation: total from the active multiplier and the rate.
    ///
    /// Piece-count mode uses the count when it is non-zero and a rate is
    /// present; otherwise the plain weight × rate rule applies, which
    /// needs both fields present but allows zero. Anything else clears
    /// the total.
    fn forward_derive(&mut self) {
        let d = &mut self.draft;
        d.total = match (d.mode(), d.rate) {
            (EntryMode::PieceCount(count), Some(rate)) if !count.is_zero() => Some(count * rate),
            _ => d.weight.zip(d.rate).map(|(w, r)| w * r),
        };
    }

    /// Reverse derivation: rate from total and the active multiplier.
    ///
    /// Runs only on total edits. With no total or a zero/absent
    /// multiplier the other fields are left alone.
    fn reverse_derive(&mut self) {
        let d = &mut self.draft;
        let (multiplier, piece_mode) = match d.mode() {
            EntryMode::PieceCount(count) => (Some(count), true),
            EntryMode::SizeGrade => (d.weight, false),
        };
        if let (Some(total), Some(m)) = (d.total, multiplier) {
            if !m.is_zero() {
                let rate = total / m;
                d.rate = Some(rate);
                if piece_mode {
                    d.weight = Some(rate);
                }
            }
        }
    }

    // ── committed list ───────────────────────────────────────────────────

    /// Commits the draft as an immutable item and resets the draft's
    /// values, keeping section and date for the next row.
    ///
    /// Piece-count rows are committed with zero weight; absent rate or
    /// total commits as zero. The whole list is re-sorted by fixed
    /// section order after the insert (stable, so rows keep their
    /// insertion order within a section). Returns the new item's id.
    pub fn commit_entry(&mut self) -> u64 {
        let d = &self.draft;
        let weight = match d.mode() {
            EntryMode::PieceCount(_) => Decimal::ZERO,
            EntryMode::SizeGrade => d.weight.unwrap_or(Decimal::ZERO),
        };

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(CommittedItem {
            id,
            section: d.section,
            item_date: d.item_date,
            label: d.label.clone(),
            weight,
            rate: d.rate.unwrap_or(Decimal::ZERO),
            total: d.total.unwrap_or(Decimal::ZERO),
        });
        self.items.sort_by_key(|item| item.section);

        tracing::debug!(id, section = %d.section, "committed entry");
        self.draft.reset_values();
        id
    }

    /// Removes the committed item with the given id; no-op when absent.
    pub fn remove_entry(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    // ── derived views ────────────────────────────────────────────────────

    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    pub fn committed_items(&self) -> &[CommittedItem] {
        &self.items
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn purchase_amount(&self) -> Option<Decimal> {
        self.purchase_amount
    }

    /// Committed items grouped by section, in fixed section order.
    pub fn section_groups(&self) -> Vec<SectionGroup> {
        group_by_section(&self.items)
    }

    /// Sum of committed weights (piece-count rows contribute zero).
    pub fn total_weight(&self) -> Decimal {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// Sum of committed totals.
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(|item| item.total).sum()
    }

    /// Revenue minus purchase amount (absent purchase counts as zero).
    pub fn profit_loss(&self) -> Decimal {
        self.total_amount() - self.purchase_amount.unwrap_or(Decimal::ZERO)
    }

    /// The committed list as store records, one per item.
    pub fn batch_records(&self) -> Vec<NewCommodityRecord> {
        let customer_name = if self.customer_name.is_empty() {
            UNKNOWN_CUSTOMER.to_string()
        } else {
            self.customer_name.clone()
        };
        self.items
            .iter()
            .map(|item| NewCommodityRecord {
                commodity_type: format!("{} - {}", item.item_date, item.label),
                weight: item.weight,
                rate: item.rate,
                total: item.total,
                section: item.section.label().to_string(),
                customer_name: customer_name.clone(),
            })
            .collect()
    }
}

impl Default for ReceiptSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a numeric input field, warning when non-empty input is dropped.
fn parse_numeric_input(raw: &str) -> Option<Decimal> {
    let value = parse_optional_decimal(raw);
    if value.is_none() && !raw.trim().is_empty() {
        tracing::warn!(input = raw, "ignoring unparsable number");
    }
    value
}
