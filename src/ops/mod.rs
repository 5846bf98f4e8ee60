//! The genetic operator algebra.
//!
//! Operators are first-class values built by factory functions that capture
//! and validate their parameters, then applied repeatedly by the search
//! driver. All randomness flows through the generator handle the caller
//! passes to `apply`, in a fixed per-invocation draw order, so seeded runs
//! reproduce exactly.
//!
//! # Key Types
//!
//! - [`Mutation`]: pure single-chromosome operators — per-gene
//!   randomisation/deletion, per-gap addition, and the alternative-choice
//!   and whole-replacement combinators
//! - [`Crossover`]: two-parents-to-one-offspring recombination — random
//!   split point or fixed-fraction split point
//! - [`OperatorConfig`]: rate parameters assembled into composed operators
//!
//! # Examples
//!
//! ```
//! use passevolve::chromosome::Chromosome;
//! use passevolve::ops::{gene_randomisation, random_point_crossover};
//! use passevolve::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let parent_a = Chromosome::sample(&mut rng, 10);
//! let parent_b = Chromosome::sample(&mut rng, 10);
//!
//! let mutate = gene_randomisation(0.1).unwrap();
//! let recombine = random_point_crossover();
//!
//! let offspring = mutate.apply(&recombine.apply(&parent_a, &parent_b, &mut rng), &mut rng);
//! assert_eq!(offspring.len(), 10);
//! ```

mod config;
mod crossover;
mod mutation;

pub use config::OperatorConfig;
pub use crossover::{fixed_point_crossover, random_point_crossover, Crossover};
pub use mutation::{
    alternative_mutations, gene_addition, gene_deletion, gene_randomisation,
    whole_chromosome_replacement, Mutation,
};
