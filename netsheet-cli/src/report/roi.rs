use chrono::NaiveDate;
use netsheet_core::RoiResult;
use netsheet_core::calculations::{BreakEven, HomeValueNote, ImprovementType, Recommendation};
use rust_decimal::Decimal;

use super::{centered, row, rule};
use crate::config::BrandingConfig;
use crate::format::{format_currency, format_long_date, format_percent};

const DISCLAIMER: [&str; 2] = [
    "* ROI percentages are industry averages. Actual returns may vary based on",
    "market conditions, quality of work, and buyer preferences in your area.",
];

pub fn improvement_name(kind: Option<ImprovementType>) -> &'static str {
    kind.unwrap_or(ImprovementType::Custom).name()
}

pub fn recommendation_text(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Excellent => {
            "Excellent investment! This improvement typically provides strong returns and can significantly increase your home's value and appeal to buyers. This is one of the best improvements you can make before selling."
        }
        Recommendation::Good => {
            "Good investment. This improvement provides solid returns and can help your home sell faster and for a better price. Consider this a smart pre-sale investment."
        }
        Recommendation::Moderate => {
            "Moderate investment. Consider if the improvement is necessary for sale or if it significantly improves your quality of life. May be worth it if it helps your home sell faster."
        }
        Recommendation::Lower => {
            "Lower ROI. Consider if this improvement is essential for the sale or if you'll enjoy it regardless of ROI. Focus on improvements with higher returns first."
        }
    }
}

pub fn home_value_note_text(note: HomeValueNote) -> &'static str {
    match note {
        HomeValueNote::Significant => {
            "Note: This improvement represents a significant portion of your home's value. Ensure it's necessary for sale."
        }
        HomeValueNote::Substantial => {
            "This is a substantial investment relative to your home's value."
        }
    }
}

pub fn break_even_text(break_even: &BreakEven) -> String {
    match break_even {
        BreakEven::PaysForItself { added_value } => format!(
            "This improvement pays for itself and adds {} in value.",
            format_currency(*added_value)
        ),
        BreakEven::PartialRecoup {
            recoup_percent,
            recouped,
            net_cost,
        } => format!(
            "You'll recoup {}% of your investment ({}), with a net cost of {}.",
            recoup_percent.round(),
            format_currency(*recouped),
            format_currency(*net_cost)
        ),
    }
}

fn figures(result: &RoiResult) -> String {
    let mut out = row("Improvement Type:", improvement_name(result.improvement_type));
    out.push_str(&row(
        "Improvement Cost:",
        &format_currency(result.improvement_cost),
    ));
    if result.current_home_value > Decimal::ZERO {
        out.push_str(&row(
            "Current Home Value:",
            &format_currency(result.current_home_value),
        ));
        out.push_str(&row(
            "% of Home Value:",
            &format_percent(result.percent_of_home_value),
        ));
    }
    out.push_str(&row("Expected ROI:", &format_percent(result.roi_percent)));
    out.push_str(&row(
        "Value Increase:",
        &format_currency(result.value_increase),
    ));
    out.push_str(&rule('-'));
    out.push_str(&row("Net Gain/Loss:", &format_currency(result.net_gain)));
    out.push_str(&row(
        "Worth It:",
        if result.is_worth_it { "Yes" } else { "No" },
    ));
    out
}

fn analysis(result: &RoiResult) -> String {
    let mut out = String::new();
    if let Some(break_even) = &result.break_even {
        out.push_str(&break_even_text(break_even));
        out.push('\n');
    }
    out.push_str(recommendation_text(result.recommendation));
    if let Some(note) = result.home_value_note {
        out.push(' ');
        out.push_str(home_value_note_text(note));
    }
    out.push('\n');
    out
}

pub fn render_screen(result: &RoiResult) -> String {
    let mut out = String::from("Home Improvement ROI\n");
    out.push_str(&rule('='));
    out.push_str(&figures(result));
    out.push('\n');
    out.push_str(&analysis(result));
    out
}

pub fn render_document(
    result: &RoiResult,
    branding: &BrandingConfig,
    generated: NaiveDate,
) -> String {
    let mut out = centered("Home Improvement ROI Report");
    out.push_str(&centered(&branding.agent_name));
    out.push_str(&rule('='));
    out.push_str(&format!("Generated: {}\n\n", format_long_date(generated)));
    out.push_str(&figures(result));
    out.push('\n');
    out.push_str(&analysis(result));
    out.push('\n');
    for line in DISCLAIMER {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn document_file_name(generated: NaiveDate) -> String {
    format!("Home-Improvement-ROI-{}.txt", generated.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use netsheet_core::RoiInput;
    use netsheet_core::calculations::RoiCalculator;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn kitchen() -> RoiResult {
        RoiCalculator.calculate(&RoiInput {
            improvement_type: Some(ImprovementType::KitchenRemodel),
            improvement_cost: dec!(40000),
            current_home_value: dec!(250000),
            ..RoiInput::default()
        })
    }

    #[test]
    fn break_even_text_partial_recoup() {
        let text = break_even_text(&BreakEven::PartialRecoup {
            recoup_percent: dec!(60),
            recouped: dec!(24000),
            net_cost: dec!(16000),
        });

        assert_eq!(
            text,
            "You'll recoup 60% of your investment ($24,000), with a net cost of $16,000."
        );
    }

    #[test]
    fn break_even_text_pays_for_itself() {
        let text = break_even_text(&BreakEven::PaysForItself {
            added_value: dec!(350),
        });

        assert_eq!(text, "This improvement pays for itself and adds $350 in value.");
    }

    #[test]
    fn screen_shows_figures_and_recommendation() {
        let screen = render_screen(&kitchen());

        assert!(screen.contains("Kitchen Remodel"));
        assert!(screen.contains("$40,000"));
        assert!(screen.contains("16.0%"));
        assert!(screen.contains("60.0%"));
        assert!(screen.contains("-$16,000"));
        assert!(screen.contains("Good investment."));
        assert!(screen.contains("significant portion of your home's value"));
    }

    #[test]
    fn home_value_lines_hidden_without_home_value() {
        let result = RoiCalculator.calculate(&RoiInput {
            improvement_type: Some(ImprovementType::InteriorPaint),
            improvement_cost: dec!(5000),
            ..RoiInput::default()
        });

        let screen = render_screen(&result);

        assert!(!screen.contains("Current Home Value:"));
        assert!(screen.contains("Excellent investment!"));
    }

    #[test]
    fn unselected_type_reads_as_custom() {
        assert_eq!(improvement_name(None), "Custom Improvement");
    }

    #[test]
    fn document_has_title_and_disclaimer() {
        let generated = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let doc = render_document(&kitchen(), &BrandingConfig::default(), generated);

        assert_eq!(doc.lines().next().map(str::trim), Some("Home Improvement ROI Report"));
        assert!(doc.contains("Generated: October 16, 2026"));
        assert!(doc.ends_with("buyer preferences in your area.\n"));
        assert_eq!(
            document_file_name(generated),
            "Home-Improvement-ROI-2026-10-16.txt"
        );
    }
}
