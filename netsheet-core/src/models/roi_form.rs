use serde::{Deserialize, Serialize};

use crate::calculations::{ImprovementType, RoiInput};
use crate::sanitize::sanitize_amount;

/// ROI fields as typed. The ROI percent may exceed 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiForm {
    pub improvement_type: Option<ImprovementType>,
    pub improvement_cost: String,
    pub current_home_value: String,
    pub expected_roi: String,
}

impl RoiForm {
    pub fn to_input(&self) -> RoiInput {
        RoiInput {
            improvement_type: self.improvement_type,
            improvement_cost: sanitize_amount(&self.improvement_cost),
            current_home_value: sanitize_amount(&self.current_home_value),
            expected_roi_percent: sanitize_amount(&self.expected_roi),
        }
    }
}
