use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Per-symptom set of diagnosis names pinned to the top of their group.
/// Absence of a symptom key is equivalent to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinStore {
    inner: IndexMap<String, IndexSet<String>>,
}

impl PinStore {
    pub fn new() -> Self {
        PinStore::default()
    }

    /// Flip pin membership for a candidate under a symptom. A symptom whose
    /// set empties is dropped, so a toggle round trip restores the pre-call
    /// state exactly.
    pub fn toggle(&mut self, symptom: &str, candidate: &str) {
        let set = self.inner.entry(symptom.to_string()).or_default();
        if !set.shift_remove(candidate) {
            set.insert(candidate.to_string());
        } else if set.is_empty() {
            self.inner.shift_remove(symptom);
        }
    }

    pub fn is_pinned(&self, symptom: &str, candidate: &str) -> bool {
        self.inner
            .get(symptom)
            .is_some_and(|set| set.contains(candidate))
    }

    pub fn pinned(&self, symptom: &str) -> Option<&IndexSet<String>> {
        self.inner.get(symptom)
    }
}

/// Per-symptom set of diagnosis names marked as considered during the
/// encounter. Independent of pinning and of selection order: deselecting a
/// symptom does not clear its recorded set, so the summary keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    inner: IndexMap<String, IndexSet<String>>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Flip recorded membership for a candidate under a symptom. A symptom
    /// whose set empties is dropped, so a toggle round trip restores the
    /// pre-call state exactly.
    pub fn toggle(&mut self, symptom: &str, candidate: &str) {
        let set = self.inner.entry(symptom.to_string()).or_default();
        if !set.shift_remove(candidate) {
            set.insert(candidate.to_string());
        } else if set.is_empty() {
            self.inner.shift_remove(symptom);
        }
    }

    pub fn is_recorded(&self, symptom: &str, candidate: &str) -> bool {
        self.inner
            .get(symptom)
            .is_some_and(|set| set.contains(candidate))
    }

    /// Iterate symptoms with their non-empty recorded sets in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.inner.iter().map(|(symptom, set)| (symptom.as_str(), set))
    }

    pub fn has_recorded(&self) -> bool {
        self.inner.values().any(|set| !set.is_empty())
    }
}
