//! Mutation operators.
//!
//! A [`Mutation`] is a pure `Chromosome -> Chromosome` transformation built
//! by a factory function that captures its parameters up front. The per-gene
//! operators walk the **input** chromosome strictly left to right, consuming
//! exactly one Bernoulli trial per position (and one alphabet draw per
//! successful trial), so the draw count under a fixed seed is a function of
//! position count and chance alone.

use rand::Rng;

use crate::chromosome::{Chromosome, Step};
use crate::error::{Error, Result};
use crate::random::Draw;

/// A mutation operator, applied with [`Mutation::apply`].
///
/// Operators are plain values: cloning one clones its captured parameters,
/// and two instances share no state beyond the generator the caller passes
/// in. Composite operators ([`Mutation::Alternative`]) nest uniformly.
///
/// Built via the factory functions [`gene_randomisation`], [`gene_deletion`],
/// [`gene_addition`], [`alternative_mutations`] and
/// [`whole_chromosome_replacement`], which validate their parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Replaces each gene, with the given chance, by a fresh uniform draw
    /// from the alphabet.
    GeneRandomisation { chance: f64 },

    /// Omits each gene with the given chance, preserving relative order.
    GeneDeletion { chance: f64 },

    /// Inserts a fresh uniform draw, with the given chance, at each of the
    /// `len + 1` gaps (before the first gene, between adjacent pairs, after
    /// the last).
    GeneAddition { chance: f64 },

    /// Delegates the whole input to `first` with the given chance, otherwise
    /// to `second`. One trial per invocation, not per gene.
    Alternative {
        chance: f64,
        first: Box<Mutation>,
        second: Box<Mutation>,
    },

    /// Ignores its input and returns the captured chromosome. Draws nothing.
    WholeReplacement { replacement: Chromosome },
}

fn checked_chance(chance: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&chance) {
        Ok(chance)
    } else {
        Err(Error::ChanceOutOfRange(chance))
    }
}

/// Per-gene randomisation: each gene is replaced, with probability `chance`,
/// by an independent uniform draw from the alphabet.
///
/// The fresh draw may coincide with the old gene; such no-op replacements
/// are expected and not redrawn. Output length always equals input length.
/// `chance = 0.0` is the identity; `chance = 1.0` replaces every position
/// (without necessarily changing it).
pub fn gene_randomisation(chance: f64) -> Result<Mutation> {
    Ok(Mutation::GeneRandomisation {
        chance: checked_chance(chance)?,
    })
}

/// Per-gene deletion: each gene is omitted with probability `chance`.
///
/// The output is an in-order subsequence of the input. `chance = 0.0` is the
/// identity; `chance = 1.0` empties the chromosome.
pub fn gene_deletion(chance: f64) -> Result<Mutation> {
    Ok(Mutation::GeneDeletion {
        chance: checked_chance(chance)?,
    })
}

/// Per-gap addition: a chromosome of length `n` has `n + 1` gaps (both ends
/// included — one gap even when empty), and each receives a fresh uniform
/// draw with probability `chance`.
///
/// Gap decisions are made against the original layout, in position order,
/// and assembled in one pass; insertions never shift later gap indices.
/// `chance = 0.0` is the identity; `chance = 1.0` yields length `2n + 1`
/// with the original genes at output indices 1, 3, 5, …
pub fn gene_addition(chance: f64) -> Result<Mutation> {
    Ok(Mutation::GeneAddition {
        chance: checked_chance(chance)?,
    })
}

/// Probabilistic choice between two mutations: one trial per invocation
/// delegates the whole input to `first` on success, `second` otherwise.
///
/// `chance = 1.0` always selects `first`; `chance = 0.0` always `second`.
pub fn alternative_mutations(chance: f64, first: Mutation, second: Mutation) -> Result<Mutation> {
    Ok(Mutation::Alternative {
        chance: checked_chance(chance)?,
        first: Box::new(first),
        second: Box::new(second),
    })
}

/// Constant replacement: ignores the input entirely and returns `replacement`.
///
/// Consumes no draws. A terminal building block for composite operators.
pub fn whole_chromosome_replacement(replacement: Chromosome) -> Mutation {
    Mutation::WholeReplacement { replacement }
}

impl Mutation {
    /// Applies the operator, returning a new chromosome.
    ///
    /// The input is never modified. All randomness comes from `rng`, drawn
    /// in a fixed left-to-right order, so a seeded generator makes the
    /// result fully reproducible.
    pub fn apply<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Chromosome {
        match self {
            Mutation::GeneRandomisation { chance } => {
                let mut genes = Vec::with_capacity(chromosome.len());
                for &gene in chromosome.genes() {
                    if rng.probability() < *chance {
                        genes.push(Step::sample(rng));
                    } else {
                        genes.push(gene);
                    }
                }
                Chromosome::new(genes)
            }
            Mutation::GeneDeletion { chance } => {
                let mut genes = Vec::with_capacity(chromosome.len());
                for &gene in chromosome.genes() {
                    if rng.probability() >= *chance {
                        genes.push(gene);
                    }
                }
                Chromosome::new(genes)
            }
            Mutation::GeneAddition { chance } => {
                let mut genes = Vec::with_capacity(2 * chromosome.len() + 1);
                if rng.probability() < *chance {
                    genes.push(Step::sample(rng));
                }
                for &gene in chromosome.genes() {
                    genes.push(gene);
                    if rng.probability() < *chance {
                        genes.push(Step::sample(rng));
                    }
                }
                Chromosome::new(genes)
            }
            Mutation::Alternative {
                chance,
                first,
                second,
            } => {
                if rng.probability() < *chance {
                    first.apply(chromosome, rng)
                } else {
                    second.apply(chromosome, rng)
                }
            }
            Mutation::WholeReplacement { replacement } => replacement.clone(),
        }
    }
}
