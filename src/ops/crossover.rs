//! Crossover operators.
//!
//! A [`Crossover`] produces one offspring from two parents by cutting both
//! at a single split point and splicing the first parent's head onto the
//! second parent's tail: `A[..s] ++ B[s..]`. The split point is always
//! bounded by the shorter parent, so slicing never errors; the two variants
//! differ only in how the point is computed. Swapping the argument order
//! yields the structurally mirrored offspring, not the same one.

use rand::Rng;

use crate::chromosome::Chromosome;
use crate::error::{Error, Result};
use crate::random::Draw;

/// A crossover operator, applied with [`Crossover::apply`].
///
/// Built via the factory functions [`random_point_crossover`] and
/// [`fixed_point_crossover`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossover {
    /// Splits at a uniformly drawn point that, whenever both parents have at
    /// least two genes, mixes at least one gene from each side.
    RandomPoint,

    /// Splits at a constant fraction of the shorter parent's length.
    /// Consumes no randomness.
    FixedPoint { fraction: f64 },
}

/// Single-point recombination at a random split.
///
/// With `m = min(|A|, |B|)`:
///
/// - `m == 0`: the split is 0 and the offspring is the second parent's genes
///   in full (an empty parent contributes nothing).
/// - `m == 1`: the split is 1, with no draw consumed; two single-gene
///   parents therefore pass the first parent through unchanged.
/// - `m >= 2`: the split is drawn uniformly from `[1, m - 1]`, so position 0
///   is never chosen and the offspring mixes at least one gene from each
///   parent.
pub fn random_point_crossover() -> Crossover {
    Crossover::RandomPoint
}

/// Single-point recombination at `round(fraction * min(|A|, |B|))`, with
/// exact midpoints rounding up.
///
/// `fraction = 0.0` returns the second parent verbatim; `fraction = 1.0`
/// splits at the end of the shorter parent. Fails with
/// [`Error::FractionOutOfRange`] unless `fraction` is in `[0.0, 1.0]`;
/// out-of-range values are rejected, never clamped.
pub fn fixed_point_crossover(fraction: f64) -> Result<Crossover> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(Crossover::FixedPoint { fraction })
    } else {
        Err(Error::FractionOutOfRange(fraction))
    }
}

impl Crossover {
    /// Produces one offspring: `first[..s] ++ second[s..]`.
    ///
    /// The parents are never modified. Empty and single-gene parents are
    /// defined boundary cases, not errors.
    pub fn apply<R: Rng>(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        let min_len = first.len().min(second.len());
        let point = match self {
            Crossover::RandomPoint => random_split_point(min_len, rng),
            Crossover::FixedPoint { fraction } => (fraction * min_len as f64).round() as usize,
        };
        splice(first, second, point)
    }
}

/// Split point for [`Crossover::RandomPoint`].
///
/// Position 0 would hand back the second parent unchanged, so it is only
/// used when a parent is empty; a shorter length of 1 leaves 1 as the only
/// in-range point and consumes no draw.
fn random_split_point<R: Rng>(min_len: usize, rng: &mut R) -> usize {
    match min_len {
        0 => 0,
        1 => 1,
        _ => rng.index(min_len - 1) + 1,
    }
}

fn splice(first: &Chromosome, second: &Chromosome, point: usize) -> Chromosome {
    first.genes()[..point]
        .iter()
        .chain(&second.genes()[point..])
        .copied()
        .collect()
}
