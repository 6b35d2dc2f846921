use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Replay one selection-widget change against the prior ordering.
///
/// `reported` is the full post-event selection as the widget reports it
/// (stable, e.g. option-definition order). Survivors keep their relative
/// position; symptoms absent from `previous` are appended at the end in
/// reported order, never inserted mid-sequence.
pub fn reorder(
    previous: &HashSet<String>,
    reported: &[String],
    previous_order: &[String],
) -> Vec<String> {
    let current: HashSet<&str> = reported.iter().map(String::as_str).collect();

    let mut order: Vec<String> = previous_order
        .iter()
        .filter(|symptom| current.contains(symptom.as_str()))
        .cloned()
        .collect();

    for symptom in reported {
        if !previous.contains(symptom) {
            order.push(symptom.clone());
        }
    }

    order
}

/// Ordered list of currently selected symptoms.
///
/// Order is recency of first selection among currently-selected symptoms,
/// not alphabetical and not catalog order. The element set always equals the
/// selection-widget set, with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    order: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Apply an atomic selection change; `reported` is the new full set in
    /// widget order.
    pub fn select(&mut self, reported: &[String]) {
        let previous: HashSet<String> = self.order.iter().cloned().collect();
        self.order = reorder(&previous, reported, &self.order);
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// The primary symptom is the first currently-selected one, if any.
    pub fn primary(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn others(&self) -> &[String] {
        self.order.get(1..).unwrap_or(&[])
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.order.iter().any(|s| s == symptom)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
