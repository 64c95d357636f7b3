use netsheet_core::ProceedsBreakdown;

use crate::format::format_currency;

const NAME_WIDTH: usize = 28;
const MONEY_WIDTH: usize = 14;

/// One summary row per scenario: price, closing costs, net and shortfall.
pub fn render_summary(rows: &[(String, ProceedsBreakdown)]) -> String {
    let mut out = format!(
        "{:<NAME_WIDTH$}{:>MONEY_WIDTH$}{:>MONEY_WIDTH$}{:>MONEY_WIDTH$}{:>MONEY_WIDTH$}\n",
        "Scenario", "Listing", "Closing Costs", "Net Proceeds", "Shortfall"
    );
    for (name, breakdown) in rows {
        out.push_str(&format!(
            "{:<NAME_WIDTH$}{:>MONEY_WIDTH$}{:>MONEY_WIDTH$}{:>MONEY_WIDTH$}{:>MONEY_WIDTH$}\n",
            name,
            format_currency(breakdown.listing_price),
            format_currency(breakdown.total_closing_costs),
            format_currency(breakdown.net_proceeds),
            format_currency(breakdown.shortfall),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use netsheet_core::{ProceedsInput, compute_breakdown};
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn summary_has_header_and_one_row_per_scenario() {
        let rows = vec![
            (
                "Typical".to_string(),
                compute_breakdown(&ProceedsInput {
                    listing_price: dec!(400000),
                    commission_rate_percent: dec!(6),
                    ..ProceedsInput::default()
                }),
            ),
            ("Empty".to_string(), compute_breakdown(&ProceedsInput::default())),
        ];

        let text = render_summary(&rows);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Scenario"));
        assert!(lines[1].starts_with("Typical"));
        assert!(lines[1].contains("$374,525"));
        assert!(lines[2].ends_with("$0"));
    }
}
