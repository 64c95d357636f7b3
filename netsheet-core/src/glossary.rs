//! Real estate term glossary with letter sections and search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

impl GlossaryTerm {
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    fn matches(
        &self,
        needle: &str,
    ) -> bool {
        self.term.to_lowercase().contains(needle) || self.definition.to_lowercase().contains(needle)
    }
}

/// Terms sharing a first letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossarySection {
    pub letter: char,
    pub terms: Vec<GlossaryTerm>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Glossary {
    sections: Vec<GlossarySection>,
}

impl Glossary {
    /// Groups terms by upper-cased first letter, sections and terms sorted.
    /// Terms with an empty name are dropped.
    pub fn new(terms: impl IntoIterator<Item = GlossaryTerm>) -> Self {
        let mut by_letter: BTreeMap<char, Vec<GlossaryTerm>> = BTreeMap::new();
        for term in terms {
            let Some(first) = term.term.trim().chars().next() else {
                continue;
            };
            let letter = first.to_uppercase().next().unwrap_or(first);
            by_letter.entry(letter).or_default().push(term);
        }

        let sections = by_letter
            .into_iter()
            .map(|(letter, mut terms)| {
                terms.sort_by_key(|t| t.term.to_lowercase());
                GlossarySection { letter, terms }
            })
            .collect();

        Self { sections }
    }

    pub fn sections(&self) -> &[GlossarySection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.terms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Case-insensitive substring search over term names and definitions.
    ///
    /// Sections without matches are dropped; a blank query returns
    /// every section.
    ///
    /// ```
    /// use netsheet_core::{Glossary, GlossaryTerm};
    ///
    /// let glossary = Glossary::new([
    ///     GlossaryTerm::new("Escrow", "Funds held by a neutral third party."),
    ///     GlossaryTerm::new("Appraisal", "A licensed estimate of value."),
    /// ]);
    /// let hits = glossary.search("NEUTRAL");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].letter, 'E');
    /// ```
    pub fn search(
        &self,
        query: &str,
    ) -> Vec<GlossarySection> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.sections.clone();
        }

        self.sections
            .iter()
            .filter_map(|section| {
                let terms: Vec<GlossaryTerm> = section
                    .terms
                    .iter()
                    .filter(|t| t.matches(&needle))
                    .cloned()
                    .collect();
                (!terms.is_empty()).then(|| GlossarySection {
                    letter: section.letter,
                    terms,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Glossary {
        Glossary::new([
            GlossaryTerm::new("Contingency", "A condition that must be met before closing."),
            GlossaryTerm::new("appraisal", "A professional estimate of market value."),
            GlossaryTerm::new("Closing Costs", "Fees paid at closing."),
            GlossaryTerm::new("Escrow", "A neutral third party holds funds."),
            GlossaryTerm::new("  ", "Nameless."),
        ])
    }

    #[test]
    fn new_groups_by_uppercase_letter_in_order() {
        let glossary = sample();

        let letters: Vec<char> = glossary.sections().iter().map(|s| s.letter).collect();
        assert_eq!(letters, vec!['A', 'C', 'E']);
        assert_eq!(glossary.len(), 4);
    }

    #[test]
    fn terms_within_a_section_are_sorted() {
        let glossary = sample();

        let c_terms: Vec<&str> = glossary.sections()[1]
            .terms
            .iter()
            .map(|t| t.term.as_str())
            .collect();
        assert_eq!(c_terms, vec!["Closing Costs", "Contingency"]);
    }

    #[test]
    fn search_matches_definitions_case_insensitively() {
        let hits = sample().search("CLOSING");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].letter, 'C');
        assert_eq!(hits[0].terms.len(), 2);
    }

    #[test]
    fn search_with_blank_query_returns_everything() {
        let glossary = sample();

        assert_eq!(glossary.search("   "), glossary.sections().to_vec());
    }

    #[test]
    fn search_without_matches_is_empty() {
        assert!(sample().search("zoning").is_empty());
    }
}
