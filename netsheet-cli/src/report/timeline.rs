use chrono::NaiveDate;
use netsheet_core::{LeadTimeAdvisory, ProjectedStep, TimelineProjection};

use super::{centered, rule};
use crate::config::BrandingConfig;
use crate::format::{format_long_date, format_step_date};

/// "Today", "N days" or "N days ago".
pub fn days_label(step: &ProjectedStep) -> String {
    if step.days_from_today < 0 {
        format!("{} days ago", step.days_from_today.unsigned_abs())
    } else if step.is_today {
        "Today".to_string()
    } else {
        format!("{} days", step.days_from_today)
    }
}

pub fn advisory_message(advisory: &LeadTimeAdvisory) -> String {
    format!(
        "Only {} days until your target closing date. A full listing plan takes about {} days; some steps may overlap or need to move faster.",
        advisory.days_until_closing, advisory.recommended_days
    )
}

/// Closing carries the highest number; the consultation is 1.
fn step_number(
    projection: &TimelineProjection,
    index: usize,
) -> usize {
    projection.steps.len() - index
}

/// Terminal view. Steps within the coming week are starred.
pub fn render_screen(projection: &TimelineProjection) -> String {
    let mut out = format!(
        "Smart-Sell Reverse Timeline\nTarget Closing: {}\n",
        format_long_date(projection.target_closing_date)
    );
    out.push_str(&rule('='));

    for (index, projected) in projection.steps.iter().enumerate() {
        let marker = if projected.is_within_one_week { '*' } else { ' ' };
        out.push_str(&format!(
            "{marker}{:>3}. {}\n       {}  ({})\n       {}\n",
            step_number(projection, index),
            projected.step.name,
            format_step_date(projected.scheduled_date),
            days_label(projected),
            projected.step.description,
        ));
    }
    out
}

/// The exportable timeline document.
pub fn render_document(
    projection: &TimelineProjection,
    branding: &BrandingConfig,
    generated: NaiveDate,
) -> String {
    let mut out = centered("Smart-Sell Reverse Timeline");
    out.push_str(&centered(&branding.agent_name));
    out.push_str(&rule('='));
    out.push_str(&format!("Generated: {}\n", format_long_date(generated)));
    out.push_str(&format!(
        "Target Closing Date: {}\n\n",
        format_long_date(projection.target_closing_date)
    ));

    let last = projection.steps.len().saturating_sub(1);
    for (index, projected) in projection.steps.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n",
            step_number(projection, index),
            projected.step.name
        ));
        out.push_str(&format!(
            "Date: {}\n",
            format_step_date(projected.scheduled_date)
        ));
        out.push_str(&format!("{}\n", days_label(projected)));
        out.push_str(&format!("Description: {}\n", projected.step.description));
        if index < last {
            out.push_str(&rule('-'));
        }
    }

    out.push('\n');
    out.push_str(&rule('='));
    out.push_str(&centered(&branding.timeline_tagline));
    out
}

/// Named after the target date.
pub fn document_file_name(target: NaiveDate) -> String {
    format!("smart-sell-timeline-{}.txt", target.format("%Y-%m-%d"))
}
