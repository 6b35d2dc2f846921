pub mod projector;
pub mod summary;

pub use projector::project;
pub use summary::summarize;
