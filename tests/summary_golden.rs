use differential_core::projection::summarize;
use differential_core::state::SessionState;

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn full_state() -> SessionState {
    let mut state = SessionState::new();
    state.selection.select(&strs(&["fever", "cough"]));
    state.records.toggle("fever", "Pneumonia");
    state.records.toggle("fever", "Influenza");
    state.records.toggle("cough", "Asthma");
    state.keywords.toggle("crackles");
    state.keywords.toggle("night sweats");
    state
}

#[test]
fn golden_summary_with_all_sections() {
    let state = full_state();

    const EXPECTED: &str = "\
■ Symptoms
Primary: fever
Others: cough

■ Differential diagnoses
# fever
- Pneumonia
- Influenza
# cough
- Asthma

■ Selected keywords
- crackles
- night sweats";

    assert_eq!(summarize(&state), EXPECTED);
}

#[test]
fn summary_is_deterministic() {
    let state = full_state();
    assert_eq!(summarize(&state), summarize(&state));

    // A structurally equal state built the same way is byte-identical too.
    assert_eq!(summarize(&full_state()), summarize(&state));
}

#[test]
fn empty_state_produces_empty_summary() {
    assert_eq!(summarize(&SessionState::new()), "");
}

#[test]
fn sections_are_omitted_when_empty() {
    let mut state = SessionState::new();
    state.selection.select(&strs(&["fever"]));

    assert_eq!(summarize(&state), "■ Symptoms\nPrimary: fever");

    // Keywords only, no selection and no records.
    let mut state = SessionState::new();
    state.keywords.toggle("crackles");
    assert_eq!(summarize(&state), "■ Selected keywords\n- crackles");
}

#[test]
fn others_line_is_omitted_for_a_single_symptom() {
    let mut state = SessionState::new();
    state.selection.select(&strs(&["cough"]));
    assert!(!summarize(&state).contains("Others:"));
}

#[test]
fn emptied_record_sets_drop_out_of_the_summary() {
    let mut state = SessionState::new();
    state.records.toggle("fever", "Pneumonia");
    state.records.toggle("fever", "Pneumonia");

    // The toggle round trip removed the record entirely.
    assert_eq!(summarize(&state), "");
}

#[test]
fn recorded_symptoms_keep_insertion_order_even_when_deselected() {
    let mut state = SessionState::new();
    state.selection.select(&strs(&["fever", "cough"]));
    state.records.toggle("cough", "Asthma");
    state.records.toggle("fever", "Pneumonia");

    // Deselect cough: its record stays, listed before fever because it was
    // recorded first.
    state.selection.select(&strs(&["fever"]));

    const EXPECTED: &str = "\
■ Symptoms
Primary: fever

■ Differential diagnoses
# cough
- Asthma
# fever
- Pneumonia";

    assert_eq!(summarize(&state), EXPECTED);
}
