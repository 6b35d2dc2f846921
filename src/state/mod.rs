pub mod keywords;
pub mod selection;
pub mod session;
pub mod stores;

pub use keywords::KeywordSelection;
pub use selection::{reorder, SelectionState};
pub use session::SessionState;
pub use stores::{PinStore, RecordStore};
