//! Reverse closing timeline ("Smart-Sell" checklist).
//!
//! The catalog lists the standard steps of a listing with their usual offset
//! in days before closing. A projection anchors the earliest step, the
//! pre-listing consultation, at today and lays every other step out at its
//! catalog distance from that anchor. The target closing date does not move
//! the steps; it only decides whether the seller gets a lead-time advisory.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that block a projection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Please select a target closing date")]
    MissingTargetDate,

    #[error("Target closing date must be in the future")]
    NotInFuture { target: NaiveDate, today: NaiveDate },
}

/// Category tag used by presenters to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepIcon {
    Celebration,
    Inspection,
    Documents,
    Checkmark,
    Money,
    Tools,
    People,
    House,
    Camera,
    Sparkles,
    Hammer,
    Rocket,
    Trash,
    Chart,
}

/// One entry of the fixed step catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub name: &'static str,
    pub days_before_closing: u32,
    pub description: &'static str,
    pub icon: StepIcon,
}

/// Standard listing steps, closing first.
pub const TIMELINE_CATALOG: [TimelineStep; 14] = [
    TimelineStep {
        name: "Closing & Move-Out",
        days_before_closing: 0,
        description: "Final walkthrough, closing documents signed, keys handed over",
        icon: StepIcon::Celebration,
    },
    TimelineStep {
        name: "Final Walkthrough",
        days_before_closing: 1,
        description: "Buyer conducts final inspection of the property",
        icon: StepIcon::Inspection,
    },
    TimelineStep {
        name: "Closing Preparation",
        days_before_closing: 3,
        description: "Review closing documents, wire transfer instructions, final HOA statements",
        icon: StepIcon::Documents,
    },
    TimelineStep {
        name: "Under Contract - Contingencies Removed",
        days_before_closing: 21,
        description: "All contingencies (inspection, appraisal, financing) satisfied",
        icon: StepIcon::Checkmark,
    },
    TimelineStep {
        name: "Appraisal Completed",
        days_before_closing: 28,
        description: "Lender appraisal ordered and completed",
        icon: StepIcon::Money,
    },
    TimelineStep {
        name: "Home Inspection & Negotiations",
        days_before_closing: 35,
        description: "Buyer inspection completed, repair requests negotiated",
        icon: StepIcon::Tools,
    },
    TimelineStep {
        name: "Under Contract - Offer Accepted",
        days_before_closing: 42,
        description: "Offer accepted, contract signed, earnest money deposited",
        icon: StepIcon::People,
    },
    TimelineStep {
        name: "Active Listings & Showings",
        days_before_closing: 49,
        description: "Property listed on MLS, open houses, showings, offers received",
        icon: StepIcon::House,
    },
    TimelineStep {
        name: "Professional Photography & Marketing Launch",
        days_before_closing: 56,
        description: "Professional photos taken, virtual tour created, marketing materials finalized",
        icon: StepIcon::Camera,
    },
    TimelineStep {
        name: "Staging & Final Touches",
        days_before_closing: 63,
        description: "Professional staging completed, final cleaning, curb appeal perfected",
        icon: StepIcon::Sparkles,
    },
    TimelineStep {
        name: "Repairs & Improvements",
        days_before_closing: 71,
        description: "All repairs completed, improvements finished, contractor work done",
        icon: StepIcon::Hammer,
    },
    TimelineStep {
        name: "MLS \"Coming Soon\" Status - Pre-Marketing Begins",
        days_before_closing: 70,
        description: "List property as \"Coming Soon\" on MLS for 21 days of pre-marketing before going \"Active\". This allows you to generate buzz, collect buyer interest, and schedule showings before the official listing date.",
        icon: StepIcon::Rocket,
    },
    TimelineStep {
        name: "Decluttering & Deep Cleaning",
        days_before_closing: 77,
        description: "Personal items removed, deep cleaning completed, depersonalization done",
        icon: StepIcon::Trash,
    },
    TimelineStep {
        name: "Pre-Listing Consultation & Strategy",
        days_before_closing: 84,
        description: "Meet with realtor, pricing strategy finalized, listing plan created",
        icon: StepIcon::Chart,
    },
];

/// The first actionable step: the one furthest from closing.
pub fn anchor_step() -> &'static TimelineStep {
    let mut anchor = &TIMELINE_CATALOG[0];
    for step in &TIMELINE_CATALOG {
        if step.days_before_closing > anchor.days_before_closing {
            anchor = step;
        }
    }
    anchor
}

/// Largest `days_before_closing` in `steps`.
const fn longest_offset(steps: &[TimelineStep]) -> u32 {
    let mut longest = 0;
    let mut i = 0;
    while i < steps.len() {
        if steps[i].days_before_closing > longest {
            longest = steps[i].days_before_closing;
        }
        i += 1;
    }
    longest
}

/// Lead time the full catalog needs, in days: the anchor step's offset.
pub const RECOMMENDED_LEAD_DAYS: i64 = longest_offset(&TIMELINE_CATALOG) as i64;

/// A catalog step placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedStep {
    pub step: TimelineStep,
    pub scheduled_date: NaiveDate,
    /// Negative for steps before today.
    pub days_from_today: i64,
    pub is_today: bool,
    pub is_within_one_week: bool,
}

/// Non-blocking notice that the target date leaves less time than the
/// catalog needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadTimeAdvisory {
    pub days_until_closing: i64,
    pub recommended_days: i64,
}

/// Dated checklist for one target closing date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineProjection {
    pub target_closing_date: NaiveDate,
    pub today: NaiveDate,
    /// In catalog order.
    pub steps: Vec<ProjectedStep>,
    pub advisory: Option<LeadTimeAdvisory>,
}

/// Rejects target dates that are not strictly after `today`.
pub fn validate_target_date(
    target: NaiveDate,
    today: NaiveDate,
) -> Result<(), TimelineError> {
    if target <= today {
        return Err(TimelineError::NotInFuture { target, today });
    }
    Ok(())
}

/// Lays the catalog out on the calendar, anchored at `today`.
///
/// `target` only feeds the lead-time advisory. Call
/// [`validate_target_date`] (or use [`plan_timeline`]) first; this function
/// does not reject past dates.
///
/// ```
/// use chrono::NaiveDate;
/// use netsheet_core::calculations::project_timeline;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let target = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
/// let projection = project_timeline(target, today);
///
/// let first = projection.steps.iter().find(|s| s.is_today).unwrap();
/// assert_eq!(first.step.name, "Pre-Listing Consultation & Strategy");
/// assert!(projection.advisory.is_none());
/// ```
pub fn project_timeline(
    target: NaiveDate,
    today: NaiveDate,
) -> TimelineProjection {
    let anchor_offset = i64::from(anchor_step().days_before_closing);

    let steps = TIMELINE_CATALOG
        .iter()
        .map(|step| {
            let days_from_today = anchor_offset - i64::from(step.days_before_closing);
            ProjectedStep {
                step: *step,
                scheduled_date: today + Duration::days(days_from_today),
                days_from_today,
                is_today: days_from_today == 0,
                is_within_one_week: (0..=7).contains(&days_from_today),
            }
        })
        .collect();

    let days_until_closing = (target - today).num_days();
    let advisory = if days_until_closing < RECOMMENDED_LEAD_DAYS {
        warn!(
            days_until_closing,
            recommended = RECOMMENDED_LEAD_DAYS,
            "Target closing date leaves less than the recommended lead time"
        );
        Some(LeadTimeAdvisory {
            days_until_closing,
            recommended_days: RECOMMENDED_LEAD_DAYS,
        })
    } else {
        None
    };

    debug!(%target, %today, "Projected closing timeline");

    TimelineProjection {
        target_closing_date: target,
        today,
        steps,
        advisory,
    }
}

/// Validates the target date and projects the timeline.
pub fn plan_timeline(
    target: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<TimelineProjection, TimelineError> {
    let target = target.ok_or(TimelineError::MissingTargetDate)?;
    validate_target_date(target, today)?;
    Ok(project_timeline(target, today))
}
