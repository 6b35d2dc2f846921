//! Deterministic symptom-to-differential-diagnosis annotation engine.
//!
//! `differential-core` resolves an ordered multi-selection of clinical
//! symptoms to their candidate diagnoses, lets callers pin candidates to the
//! top of their group, record which candidates were actually considered, and
//! highlight clinically relevant keywords inside free-text hints, while
//! keeping a derived plain-text clinical summary continuously in sync. All
//! projections are deterministic — identical session state always produces
//! identical output, byte-for-byte.
//!
//! The crate holds no hidden globals: the catalog is loaded once into a
//! [`catalog::CatalogBundle`], session state lives in an explicit
//! [`state::SessionState`], and every view is recomputed from those inputs.

pub mod catalog;
pub mod engine;
pub mod highlight;
pub mod projection;
pub mod state;
pub mod types;
