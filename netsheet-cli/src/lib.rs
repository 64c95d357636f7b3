//! Presentation layer for the seller estimators: configuration, logging,
//! text rendering, document export and the HTTP contact submitter.

pub mod config;
pub mod format;
pub mod logging;
pub mod report;
pub mod submit;
