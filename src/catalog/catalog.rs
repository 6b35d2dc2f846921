use std::collections::HashSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One differential-diagnosis candidate attached to a symptom entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCandidate {
    pub name: String,
    #[serde(default)]
    pub interview_points: Vec<String>,
    #[serde(default)]
    pub physical_exam_points: Vec<String>,
}

/// One catalog record: a symptom and its candidate list in declared order.
///
/// `differential_diagnoses` defaults to empty so a malformed record resolves
/// to zero candidates instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub symptom: String,
    #[serde(default)]
    pub differential_diagnoses: Vec<DiagnosisCandidate>,
}

/// Static symptom → candidates lookup table. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<SymptomEntry>,
}

impl Catalog {
    /// Build a catalog from loaded records. Symptom names must be unique;
    /// on a duplicate the first record wins and the rest are dropped with a
    /// warning.
    pub fn new(entries: Vec<SymptomEntry>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
        let mut unique = Vec::with_capacity(entries.len());
        for entry in entries {
            if seen.insert(entry.symptom.clone()) {
                unique.push(entry);
            } else {
                tracing::warn!(symptom = %entry.symptom, "duplicate catalog entry dropped");
            }
        }
        Catalog { entries: unique }
    }

    /// Candidates for a symptom, in catalog order.
    /// A missing symptom resolves to an empty slice, not an error.
    pub fn resolve(&self, symptom: &str) -> &[DiagnosisCandidate] {
        self.entries
            .iter()
            .find(|entry| entry.symptom == symptom)
            .map(|entry| entry.differential_diagnoses.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.entries.iter().any(|entry| entry.symptom == symptom)
    }

    /// Symptom names in catalog order, for populating a selection widget.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.symptom.as_str())
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stable partition of a candidate list: pinned candidates first, then the
/// rest, catalog-relative order preserved within each half.
///
/// This is deliberately not a sort — ties among pinned-pinned or
/// unpinned-unpinned pairs must keep their declared order.
pub fn pinned_first<'a>(
    candidates: &'a [DiagnosisCandidate],
    pinned: Option<&IndexSet<String>>,
) -> Vec<&'a DiagnosisCandidate> {
    let Some(pinned) = pinned.filter(|set| !set.is_empty()) else {
        return candidates.iter().collect();
    };

    let (front, back): (Vec<&DiagnosisCandidate>, Vec<&DiagnosisCandidate>) = candidates
        .iter()
        .partition(|candidate| pinned.contains(candidate.name.as_str()));

    front.into_iter().chain(back).collect()
}
