use std::io::Read;

use netsheet_core::{Glossary, GlossaryTerm};
use thiserror::Error;
use tracing::debug;

/// Terms shipped with the binary (`term,definition`).
const BUILTIN_GLOSSARY_CSV: &str = include_str!("../data/glossary.csv");

#[derive(Debug, Error)]
pub enum GlossaryLoaderError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// `row` is 1-based (header = row 0).
    #[error("empty term on row {row}")]
    EmptyTerm { row: usize },
}

pub struct GlossaryLoader;

impl GlossaryLoader {
    /// The built-in seller glossary.
    pub fn builtin() -> Result<Glossary, GlossaryLoaderError> {
        Self::parse(BUILTIN_GLOSSARY_CSV.as_bytes())
    }

    /// Parse a `term,definition` CSV into a sectioned glossary.
    pub fn parse<R: Read>(reader: R) -> Result<Glossary, GlossaryLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut terms = Vec::new();
        for (idx, result) in csv_reader.deserialize::<GlossaryTerm>().enumerate() {
            let term = result?;
            if term.term.is_empty() {
                return Err(GlossaryLoaderError::EmptyTerm { row: idx + 1 });
            }
            terms.push(term);
        }

        debug!(count = terms.len(), "Parsed glossary terms");
        Ok(Glossary::new(terms))
    }
}
