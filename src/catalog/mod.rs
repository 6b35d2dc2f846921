pub mod catalog;
pub mod loader;

pub use catalog::{pinned_first, Catalog, DiagnosisCandidate, SymptomEntry};
pub use loader::{CatalogBundle, CatalogError};
