use crate::catalog::{pinned_first, CatalogBundle, DiagnosisCandidate};
use crate::highlight::{highlight, HighlightMode, Segment};
use crate::state::SessionState;
use crate::types::view::{DiagnosisCard, Snapshot, SymptomGroup};

use super::summary::summarize;

/// Project catalog + session state into the render-ready view model.
///
/// Pure function of its inputs: calling twice with identical state yields
/// identical output, which is what makes recompute-everything-on-any-change
/// rendering safe.
pub fn project(bundle: &CatalogBundle, state: &SessionState, mode: HighlightMode) -> Snapshot {
    let groups = state
        .selection
        .order()
        .iter()
        .enumerate()
        .map(|(index, symptom)| {
            let candidates = bundle.catalog.resolve(symptom);
            let ordered = pinned_first(candidates, state.pins.pinned(symptom));

            let cards = ordered
                .into_iter()
                .map(|candidate| make_card(candidate, symptom, bundle, state, mode))
                .collect();

            SymptomGroup {
                symptom: symptom.clone(),
                primary: index == 0,
                empty: candidates.is_empty(),
                cards,
            }
        })
        .collect();

    Snapshot {
        groups,
        selected_keywords: state.keywords.iter().map(str::to_string).collect(),
        summary: summarize(state),
    }
}

fn make_card(
    candidate: &DiagnosisCandidate,
    symptom: &str,
    bundle: &CatalogBundle,
    state: &SessionState,
    mode: HighlightMode,
) -> DiagnosisCard {
    let highlight_points = |points: &[String]| -> Vec<Vec<Segment>> {
        points
            .iter()
            .map(|point| highlight(point, &bundle.keywords, &state.keywords, mode))
            .collect()
    };

    DiagnosisCard {
        name: candidate.name.clone(),
        pinned: state.pins.is_pinned(symptom, &candidate.name),
        recorded: state.records.is_recorded(symptom, &candidate.name),
        interview_points: highlight_points(&candidate.interview_points),
        physical_exam_points: highlight_points(&candidate.physical_exam_points),
    }
}
