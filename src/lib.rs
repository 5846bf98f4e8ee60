//! Genetic-operator core for compiler pass-ordering search.
//!
//! A search driver evolves sequences of optimization passes ("chromosomes")
//! to find orderings that minimize a cost metric. This crate provides the
//! pieces that make that evolution correct and reproducible:
//!
//! - **Chromosome model**: [`chromosome::Step`] (the fixed pass alphabet,
//!   with one-character codes and full names) and [`chromosome::Chromosome`]
//!   (an immutable, ordered gene sequence with a compact string encoding).
//! - **Mutation operators**: per-gene randomisation and deletion, per-gap
//!   addition, plus the alternative-choice and whole-replacement
//!   combinators ([`ops::Mutation`]).
//! - **Crossover operators**: random-point and fixed-fraction-point
//!   single-split recombination ([`ops::Crossover`]).
//! - **Deterministic sampling**: a seed-portable generator and the draw
//!   vocabulary the operators consume ([`random`]).
//!
//! Population management, fitness evaluation (compiling and measuring) and
//! selection live in the surrounding search tool; they hold chromosomes and
//! operator values built here and invoke them each generation.
//!
//! # Reproducibility
//!
//! Operators hold no hidden state: every draw comes from the `&mut R`
//! generator handle the caller passes in, in a fixed left-to-right order per
//! invocation. Seeding with [`random::create_rng`] and replaying the same
//! operator sequence on the same inputs reproduces every offspring exactly.
//! Callers that fan work out across threads must either serialize draws
//! through one handle or give each worker its own seeded generator.

pub mod chromosome;
pub mod error;
pub mod ops;
pub mod random;
