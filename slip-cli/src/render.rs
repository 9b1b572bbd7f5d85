//! Plain-text rendering of the receipt view.

use std::fmt::Write;

use rust_decimal::Decimal;
use slip_core::ReceiptSession;

const WIDTH: usize = 58;

/// Renders the session as a printable receipt: header, section blocks
/// with subtotals, grand totals, and a purchase/profit footer shown only
/// when a purchase amount was entered.
pub fn render_receipt(session: &ReceiptSession) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);

    let customer = if session.customer_name().is_empty() {
        "Customer Receipt"
    } else {
        session.customer_name()
    };
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{customer:<38}{:>20}", session.draft().item_date);
    let _ = writeln!(out, "{:<38}{:>20}", "TOTAL", session.total_amount());
    let _ = writeln!(out, "{thin}");
    let _ = writeln!(
        out,
        "{:<4} {:<14} {:>10} {:>10} {:>14}",
        "NO.", "SIZES", "WEIGHT", "RATE", "AMOUNT"
    );

    for group in session.section_groups() {
        let _ = writeln!(out, "{}", group.section.label());
        for (idx, row) in group.rows.iter().enumerate() {
            let weight = if row.weight.is_zero() {
                "-".to_string()
            } else {
                row.weight.to_string()
            };
            let rate = if row.rate.is_zero() {
                "-".to_string()
            } else {
                row.rate.to_string()
            };
            let _ = writeln!(
                out,
                "{:<4} {:<14} {:>10} {:>10} {:>14}",
                idx + 1,
                row.label,
                weight,
                rate,
                row.total
            );
        }
        let _ = writeln!(
            out,
            "{:<4} {:<14} {:>10} {:>10} {:>14}",
            "", "TOTAL", group.weight, "", group.total
        );
    }

    if !session.committed_items().is_empty() {
        let _ = writeln!(out, "{thin}");
        let _ = writeln!(
            out,
            "TOTAL SLIP{:>24} {:>23}",
            format!("Wt: {}", session.total_weight()),
            session.total_amount()
        );
    }

    if let Some(purchase) = session.purchase_amount() {
        let profit = session.profit_loss();
        let sign = if profit >= Decimal::ZERO { "+" } else { "" };
        let _ = writeln!(out, "{thin}");
        let _ = writeln!(out, "Purchase: {purchase}");
        let _ = writeln!(out, "Profit / Loss: {sign}{profit}");
    }

    let _ = writeln!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use slip_core::{EntryField, Section};

    use super::*;

    fn session() -> ReceiptSession {
        ReceiptSession::starting_on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn sections_render_in_fixed_order_with_subtotals() {
        let mut s = session();
        s.set_section(Section::A);
        s.update_field(EntryField::Label, "10/20");
        s.update_field(EntryField::Weight, "2");
        s.update_field(EntryField::Rate, "40");
        s.commit_entry();
        s.set_section(Section::APlus);
        s.update_field(EntryField::Label, "6/10");
        s.update_field(EntryField::Weight, "1");
        s.update_field(EntryField::Rate, "50");
        s.commit_entry();

        let text = render_receipt(&s);
        let a_plus = text.find("(A+)").expect("missing (A+) heading");
        let a = text.find("\n(A)").expect("missing (A) heading");
        assert!(a_plus < a, "sections out of order:\n{text}");
        assert!(text.contains("TOTAL SLIP"));
    }

    #[test]
    fn piece_count_rows_show_a_dash_for_weight() {
        let mut s = session();
        s.update_field(EntryField::Label, "4");
        s.update_field(EntryField::Weight, "12.5");
        s.commit_entry();

        let text = render_receipt(&s);
        let row_line = text
            .lines()
            .find(|l| l.starts_with("1 "))
            .expect("missing item row");
        assert!(row_line.contains(" - "), "weight should render as dash: {row_line}");
        assert!(row_line.contains("50.0"));
    }

    #[test]
    fn profit_footer_appears_only_with_a_purchase_amount() {
        let mut s = session();
        s.update_field(EntryField::Weight, "2");
        s.update_field(EntryField::Rate, "50");
        s.commit_entry();

        assert!(!render_receipt(&s).contains("Profit / Loss"));

        s.set_purchase_amount("30");
        let text = render_receipt(&s);
        assert!(text.contains("Purchase: 30"));
        assert!(text.contains("Profit / Loss: +70"));
    }

    #[test]
    fn empty_session_renders_header_without_totals_block() {
        let text = render_receipt(&session());
        assert!(text.contains("Customer Receipt"));
        assert!(!text.contains("TOTAL SLIP"));
    }
}
