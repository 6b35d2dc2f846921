use serde::{Deserialize, Serialize};

use crate::highlight::Segment;

/// One diagnosis card inside a symptom group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCard {
    pub name: String,
    pub pinned: bool,
    pub recorded: bool,
    /// One highlighted segment run per interview hint string.
    pub interview_points: Vec<Vec<Segment>>,
    /// One highlighted segment run per physical-exam hint string.
    pub physical_exam_points: Vec<Vec<Segment>>,
}

/// One symptom group in the projected view, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomGroup {
    pub symptom: String,
    /// True iff this symptom is first in the selection order.
    pub primary: bool,
    /// True when the catalog holds no candidates for this symptom; renderers
    /// show a placeholder instead of cards.
    pub empty: bool,
    pub cards: Vec<DiagnosisCard>,
}

/// The render-ready projection of a session.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub groups: Vec<SymptomGroup>,
    /// Currently toggled-on keywords, in insertion order.
    pub selected_keywords: Vec<String>,
    /// Copy-ready plain-text clinical summary.
    pub summary: String,
}
