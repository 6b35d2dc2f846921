use crate::state::SessionState;

/// Derive the copy-ready plain-text clinical note from session state.
///
/// Fixed section order: symptoms, recorded diagnoses, selected keywords.
/// Empty sections are omitted, sections are separated by exactly one blank
/// line, and trailing whitespace is trimmed. Two calls with identical state
/// produce byte-identical output.
pub fn summarize(state: &SessionState) -> String {
    let mut sections: Vec<String> = Vec::new();

    if let Some(primary) = state.selection.primary() {
        let mut section = String::from("■ Symptoms\n");
        section.push_str(&format!("Primary: {primary}\n"));
        let others = state.selection.others();
        if !others.is_empty() {
            section.push_str(&format!("Others: {}\n", others.join(", ")));
        }
        sections.push(section);
    }

    if state.records.has_recorded() {
        let mut section = String::from("■ Differential diagnoses\n");
        for (symptom, recorded) in state.records.iter() {
            if recorded.is_empty() {
                continue;
            }
            section.push_str(&format!("# {symptom}\n"));
            for name in recorded {
                section.push_str(&format!("- {name}\n"));
            }
        }
        sections.push(section);
    }

    if !state.keywords.is_empty() {
        let mut section = String::from("■ Selected keywords\n");
        for keyword in state.keywords.iter() {
            section.push_str(&format!("- {keyword}\n"));
        }
        sections.push(section);
    }

    sections.join("\n").trim().to_string()
}
