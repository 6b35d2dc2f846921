use serde::{Deserialize, Serialize};

use super::keywords::KeywordSelection;
use super::selection::SelectionState;
use super::stores::{PinStore, RecordStore};

/// All mutable session state in one explicit, host-owned object.
///
/// Created empty at session start, mutated only through the engine's command
/// entry points, and serializable wholesale so the host can persist and
/// restore it in whatever medium it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub selection: SelectionState,
    pub pins: PinStore,
    pub records: RecordStore,
    pub keywords: KeywordSelection,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }
}
