use netsheet_core::GlossarySection;

/// Letter headings with each term and its definition beneath.
pub fn render(sections: &[GlossarySection]) -> String {
    if sections.is_empty() {
        return "No terms found.\n".to_string();
    }

    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("{}\n", section.letter));
        for term in &section.terms {
            out.push_str(&format!("  {}\n      {}\n", term.term, term.definition));
        }
        out.push('\n');
    }
    out
}
