use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculations::{TimelineError, TimelineProjection, plan_timeline};
use crate::sanitize::parse_date;

/// Target closing date as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineForm {
    pub target_closing_date: String,
}

impl TimelineForm {
    pub fn new(target_closing_date: impl Into<String>) -> Self {
        Self {
            target_closing_date: target_closing_date.into(),
        }
    }

    /// Plans the checklist. Empty or unreadable dates count as missing.
    pub fn plan(
        &self,
        today: NaiveDate,
    ) -> Result<TimelineProjection, TimelineError> {
        plan_timeline(parse_date(&self.target_closing_date), today)
    }
}
