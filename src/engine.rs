use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogBundle};
use crate::highlight::HighlightMode;
use crate::projection::{project, summarize};
use crate::state::SessionState;
use crate::types::view::Snapshot;

/// UI events as explicit commands, decoupled from any rendering technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Atomic selection change: the full post-event set in widget order.
    SelectSymptoms { symptoms: Vec<String> },
    TogglePin { symptom: String, candidate: String },
    ToggleRecorded { symptom: String, candidate: String },
    ToggleKeyword { keyword: String },
}

/// The annotation engine: a loaded catalog bundle plus one session.
///
/// Constructible only from a successfully loaded [`CatalogBundle`], so no
/// mutation entry point can run before the load completed. Every operation
/// is synchronous and runs to completion; the full view is recomputed after
/// each mutation rather than patched incrementally.
#[derive(Debug, Clone)]
pub struct DifferentialEngine {
    bundle: CatalogBundle,
    state: SessionState,
    mode: HighlightMode,
}

impl DifferentialEngine {
    /// Start a fresh session over a loaded bundle.
    pub fn new(bundle: CatalogBundle) -> Self {
        DifferentialEngine {
            bundle,
            state: SessionState::new(),
            mode: HighlightMode::default(),
        }
    }

    pub fn with_mode(bundle: CatalogBundle, mode: HighlightMode) -> Self {
        DifferentialEngine {
            bundle,
            state: SessionState::new(),
            mode,
        }
    }

    /// Resume a persisted session.
    pub fn from_state(bundle: CatalogBundle, state: SessionState) -> Self {
        DifferentialEngine {
            bundle,
            state,
            mode: HighlightMode::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.bundle.catalog
    }

    pub fn bundle(&self) -> &CatalogBundle {
        &self.bundle
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply one command and return the fresh projection.
    ///
    /// Commands are total over well-formed inputs: a pin or record toggle
    /// naming a symptom the catalog does not know (a stale UI reference) is a
    /// no-op, never an error.
    pub fn apply(&mut self, command: Command) -> Snapshot {
        match command {
            Command::SelectSymptoms { symptoms } => {
                self.state.selection.select(&symptoms);
            }
            Command::TogglePin { symptom, candidate } => {
                if self.bundle.catalog.contains(&symptom) {
                    self.state.pins.toggle(&symptom, &candidate);
                }
            }
            Command::ToggleRecorded { symptom, candidate } => {
                if self.bundle.catalog.contains(&symptom) {
                    self.state.records.toggle(&symptom, &candidate);
                }
            }
            Command::ToggleKeyword { keyword } => {
                self.state.keywords.toggle(&keyword);
            }
        }
        self.snapshot()
    }

    /// Recompute the view model from current state.
    pub fn snapshot(&self) -> Snapshot {
        project(&self.bundle, &self.state, self.mode)
    }

    /// The copy-ready clinical note for current state.
    pub fn summary(&self) -> String {
        summarize(&self.state)
    }
}
