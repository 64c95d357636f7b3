use chrono::NaiveDate;
use netsheet_core::ProceedsBreakdown;
use netsheet_core::calculations::LineItemKind;

use super::{centered, row, rule};
use crate::config::BrandingConfig;
use crate::format::{format_currency, format_long_date};

const DISCLAIMER: [&str; 2] = [
    "* This is an estimate only. Actual proceeds may vary based on final closing costs,",
    "prorations, and adjustments. Consult with your real estate agent for accurate figures.",
];

fn body(breakdown: &ProceedsBreakdown) -> String {
    let mut out = String::new();
    for item in breakdown.line_items() {
        match item.kind {
            LineItemKind::SalePrice => {
                out.push_str(&row(&format!("{}:", item.label), &format_currency(item.amount)));
                out.push('\n');
            }
            LineItemKind::Deduction => out.push_str(&row(
                &format!("Less: {}", item.label),
                &format!("-{}", format_currency(item.amount)),
            )),
        }
    }
    out.push_str(&rule('-'));
    out.push_str(&row(
        "Estimated Net Proceeds:",
        &format_currency(breakdown.net_proceeds),
    ));
    if breakdown.is_underwater() {
        out.push_str(&row(
            "Shortfall due at closing:",
            &format_currency(breakdown.shortfall),
        ));
    }
    out
}

/// Terminal view of a breakdown.
pub fn render_screen(breakdown: &ProceedsBreakdown) -> String {
    let mut out = String::from("Seller Net Sheet\n");
    out.push_str(&rule('='));
    out.push_str(&body(breakdown));
    out
}

/// The exportable net sheet document.
pub fn render_document(
    breakdown: &ProceedsBreakdown,
    branding: &BrandingConfig,
    generated: NaiveDate,
) -> String {
    let mut out = centered("Seller Net Sheet Report");
    out.push_str(&centered(&branding.agent_name));
    out.push_str(&rule('='));
    out.push_str(&format!("Generated: {}\n\n", format_long_date(generated)));
    out.push_str(&body(breakdown));
    out.push('\n');
    for line in DISCLAIMER {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn document_file_name(generated: NaiveDate) -> String {
    format!("Seller-Net-Sheet-{}.txt", generated.format("%Y-%m-%d"))
}
