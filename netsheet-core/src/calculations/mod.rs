//! Calculation modules for the seller estimators.
//!
//! Every calculator here is a pure function of its input record and a fixed
//! table of constants: the net-sheet proceeds engine, the tax proration it
//! depends on, the per-location transfer tax rules, the reverse closing
//! timeline, and the home-improvement ROI estimator.

pub mod common;
pub mod jurisdiction;
pub mod proceeds;
pub mod proration;
pub mod roi;
pub mod timeline;

pub use jurisdiction::{
    Location, TexasRecordingRule, TitleCompanyFees, TransferTaxRule, TransferTaxes,
    derive_transfer_and_recording_tax,
};
pub use proceeds::{
    LineItem, LineItemKind, NetSheetCalculator, ProceedsBreakdown, ProceedsInput,
    compute_breakdown,
};
pub use proration::{days_elapsed, days_in_year, prorate_yearly_amount};
pub use roi::{
    BreakEven, CostRange, HomeValueNote, ImprovementType, Recommendation, RoiCalculator,
    RoiInput, RoiResult,
};
pub use timeline::{
    LeadTimeAdvisory, ProjectedStep, RECOMMENDED_LEAD_DAYS, StepIcon, TIMELINE_CATALOG,
    TimelineError, TimelineProjection, TimelineStep, anchor_step, plan_timeline,
    project_timeline, validate_target_date,
};
