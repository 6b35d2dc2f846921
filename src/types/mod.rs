pub mod identifiers;
pub mod view;

pub use identifiers::CatalogVersion;
pub use view::{DiagnosisCard, Snapshot, SymptomGroup};
