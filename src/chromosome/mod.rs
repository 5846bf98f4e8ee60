//! The chromosome data model.
//!
//! A [`Chromosome`] is an ordered sequence of [`Step`] genes — one candidate
//! ordering of the compiler's optimization passes. The gene alphabet is the
//! fixed pass registry; each step has a one-character display code (used by
//! the compact string encoding) and a full name (used by pass pipelines).
//!
//! # Key Types
//!
//! - [`Step`]: one pass; the alphabet lives in [`Step::ALL`]
//! - [`Chromosome`]: immutable gene sequence with value semantics

mod step;
mod types;

pub use step::Step;
pub use types::Chromosome;
