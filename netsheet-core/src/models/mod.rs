mod contact;
mod net_sheet_form;
mod roi_form;
mod timeline_form;

pub use contact::{ContactForm, FieldError};
pub use net_sheet_form::{InvalidField, NetSheetForm};
pub use roi_form::RoiForm;
pub use timeline_form::TimelineForm;
