//! Operator configuration.
//!
//! [`OperatorConfig`] holds the rate parameters a search driver tunes and
//! assembles them into the composed operators it runs each generation.

use super::crossover::{fixed_point_crossover, random_point_crossover, Crossover};
use super::mutation::{
    alternative_mutations, gene_addition, gene_deletion, gene_randomisation, Mutation,
};
use crate::error::Result;

/// Rate parameters for the per-generation operator pair.
///
/// The mutation side composes the three point/structural operators through
/// nested alternatives: each invocation first chooses between point
/// randomisation and a structural length change, then — when structural —
/// between deletion and addition. The crossover side is either the random
/// split or a pinned fraction.
///
/// Rates are stored as given; validation happens in [`build_mutation`] and
/// [`build_crossover`], which reject (never clamp) out-of-range values.
///
/// # Examples
///
/// ```
/// use passevolve::ops::OperatorConfig;
///
/// let config = OperatorConfig::default()
///     .with_randomisation_chance(0.1)
///     .with_deletion_vs_addition(0.6);
///
/// let mutation = config.build_mutation().unwrap();
/// let crossover = config.build_crossover().unwrap();
/// ```
///
/// [`build_mutation`]: OperatorConfig::build_mutation
/// [`build_crossover`]: OperatorConfig::build_crossover
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorConfig {
    /// Per-gene replacement chance used by gene randomisation.
    pub randomisation_chance: f64,

    /// Per-gene removal chance used by gene deletion.
    pub deletion_chance: f64,

    /// Per-gap insertion chance used by gene addition.
    pub addition_chance: f64,

    /// Chance of applying point randomisation instead of a structural
    /// (length-changing) mutation.
    pub randomisation_vs_structural: f64,

    /// Within structural mutations, the chance of deletion over addition.
    pub deletion_vs_addition: f64,

    /// `Some(fraction)` pins the crossover split to a fixed fraction of the
    /// shorter parent; `None` draws the split point per invocation.
    pub crossover_point_fraction: Option<f64>,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            randomisation_chance: 0.05,
            deletion_chance: 0.05,
            addition_chance: 0.05,
            randomisation_vs_structural: 0.5,
            deletion_vs_addition: 0.5,
            crossover_point_fraction: None,
        }
    }
}

impl OperatorConfig {
    /// Sets the per-gene randomisation chance.
    pub fn with_randomisation_chance(mut self, chance: f64) -> Self {
        self.randomisation_chance = chance;
        self
    }

    /// Sets the per-gene deletion chance.
    pub fn with_deletion_chance(mut self, chance: f64) -> Self {
        self.deletion_chance = chance;
        self
    }

    /// Sets the per-gap addition chance.
    pub fn with_addition_chance(mut self, chance: f64) -> Self {
        self.addition_chance = chance;
        self
    }

    /// Sets the point-vs-structural choice chance.
    pub fn with_randomisation_vs_structural(mut self, chance: f64) -> Self {
        self.randomisation_vs_structural = chance;
        self
    }

    /// Sets the deletion-vs-addition choice chance.
    pub fn with_deletion_vs_addition(mut self, chance: f64) -> Self {
        self.deletion_vs_addition = chance;
        self
    }

    /// Pins the crossover split to a fixed fraction.
    pub fn with_crossover_point_fraction(mut self, fraction: f64) -> Self {
        self.crossover_point_fraction = Some(fraction);
        self
    }

    /// Builds the composed mutation operator.
    ///
    /// Surfaces the first out-of-range rate as the factory error.
    pub fn build_mutation(&self) -> Result<Mutation> {
        alternative_mutations(
            self.randomisation_vs_structural,
            gene_randomisation(self.randomisation_chance)?,
            alternative_mutations(
                self.deletion_vs_addition,
                gene_deletion(self.deletion_chance)?,
                gene_addition(self.addition_chance)?,
            )?,
        )
    }

    /// Builds the crossover operator.
    pub fn build_crossover(&self) -> Result<Crossover> {
        match self.crossover_point_fraction {
            Some(fraction) => fixed_point_crossover(fraction),
            None => Ok(random_point_crossover()),
        }
    }
}
