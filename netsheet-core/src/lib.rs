//! Seller-side real-estate estimators.
//!
//! The crate is split into pure calculators ([`calculations`]), the raw form
//! models that feed them ([`models`]), boundary sanitization ([`sanitize`]),
//! the glossary search ([`glossary`]) and the contact-form submission seam
//! ([`submit`]). Nothing in here performs I/O.

pub mod calculations;
pub mod glossary;
pub mod models;
pub mod sanitize;
pub mod submit;

pub use calculations::{
    LeadTimeAdvisory, Location, NetSheetCalculator, ProceedsBreakdown, ProceedsInput,
    ProjectedStep, RoiInput, RoiResult, TimelineError, TimelineProjection, TimelineStep,
    TitleCompanyFees, TransferTaxes, compute_breakdown, project_timeline,
};
pub use glossary::{Glossary, GlossarySection, GlossaryTerm};
pub use models::{ContactForm, FieldError, InvalidField, NetSheetForm, RoiForm, TimelineForm};
pub use submit::{ContactError, FormSubmitter, SubmitError, submit_contact};
