//! CSV loaders for batch net sheets and the glossary term catalog.

mod glossary;
mod scenario;

pub use glossary::{GlossaryLoader, GlossaryLoaderError};
pub use scenario::{Scenario, ScenarioLoader, ScenarioLoaderError};
