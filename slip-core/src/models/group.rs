use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CommittedItem, Section};

/// Committed items of one section plus that section's subtotals.
///
/// Derived, never stored: grouped views are rebuilt from the committed
/// list on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGroup {
    pub section: Section,
    pub rows: Vec<CommittedItem>,
    pub weight: Decimal,
    pub total: Decimal,
}

/// Partitions committed items by section, in fixed section order.
///
/// Sections with no items are omitted. Rows keep the order they have in
/// `items`, which the session maintains as insertion order within a
/// section.
pub fn group_by_section(items: &[CommittedItem]) -> Vec<SectionGroup> {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let rows: Vec<CommittedItem> = items
                .iter()
                .filter(|item| item.section == section)
                .cloned()
                .collect();
            if rows.is_empty() {
                return None;
            }
            let weight = rows.iter().map(|r| r.weight).sum();
            let total = rows.iter().map(|r| r.total).sum();
            Some(SectionGroup {
                section,
                rows,
                weight,
                total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn item(id: u64, section: Section, weight: Decimal, total: Decimal) -> CommittedItem {
        CommittedItem {
            id,
            section,
            item_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            label: "10/20".to_string(),
            weight,
            rate: Decimal::ZERO,
            total,
        }
    }

    #[test]
    fn groups_follow_fixed_section_order_and_omit_empty_sections() {
        let items = vec![
            item(1, Section::TwoUpTor, dec!(1), dec!(10)),
            item(2, Section::APlus, dec!(2), dec!(20)),
        ];

        let groups = group_by_section(&items);
        let order: Vec<Section> = groups.iter().map(|g| g.section).collect();
        assert_eq!(order, vec![Section::APlus, Section::TwoUpTor]);
    }

    #[test]
    fn subtotals_sum_weight_and_total_per_section() {
        let items = vec![
            item(1, Section::A, dec!(1.5), dec!(30)),
            item(2, Section::A, dec!(2.5), dec!(45)),
        ];

        let groups = group_by_section(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].weight, dec!(4.0));
        assert_eq!(groups[0].total, dec!(75));
    }

    #[test]
    fn rows_keep_their_order_within_a_group() {
        let items = vec![
            item(7, Section::B, dec!(1), dec!(1)),
            item(3, Section::B, dec!(1), dec!(1)),
        ];

        let groups = group_by_section(&items);
        let ids: Vec<u64> = groups[0].rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn empty_list_yields_no_groups() {
        assert!(group_by_section(&[]).is_empty());
    }
}
