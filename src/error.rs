//! Error types for operator and chromosome construction.
//!
//! Errors only occur at construction time: decoding a chromosome from an
//! encoding that references unknown steps, or building an operator from an
//! out-of-range parameter. Applying an already-built operator is total —
//! empty chromosomes, unsplittable parents and the like are defined boundary
//! behaviors, not errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A mutation chance outside `[0.0, 1.0]` (NaN included).
    ///
    /// Out-of-range chances are rejected, never clamped.
    #[error("mutation chance must be in [0.0, 1.0], got {0}")]
    ChanceOutOfRange(f64),

    /// A crossover point fraction outside `[0.0, 1.0]` (NaN included).
    #[error("crossover point fraction must be in [0.0, 1.0], got {0}")]
    FractionOutOfRange(f64),

    /// A character that is not the code of any step in the alphabet.
    ///
    /// Whitespace is not a gene either; callers must strip it before
    /// decoding.
    #[error("unknown optimisation step code {0:?}")]
    UnknownStepCode(char),

    /// A string that is not the full name of any step in the alphabet.
    #[error("unknown optimisation step name {0:?}")]
    UnknownStepName(String),
}
