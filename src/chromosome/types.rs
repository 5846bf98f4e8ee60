//! The chromosome value type.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::step::Step;
use crate::error::{Error, Result};

/// An ordered sequence of optimization steps — one candidate pass ordering.
///
/// Chromosomes are immutable values: every genetic operator returns a new
/// chromosome and never touches its inputs, so they can be duplicated and
/// shared across workers freely. Equality is structural, order included,
/// since the order *is* the pass schedule. The empty chromosome is valid.
///
/// The compact string encoding maps each gene to its one-character code:
///
/// ```
/// use passevolve::chromosome::Chromosome;
///
/// let chromosome: Chromosome = "mgdLu".parse().unwrap();
/// assert_eq!(chromosome.len(), 5);
/// assert_eq!(chromosome.to_string(), "mgdLu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Step>,
}

impl Chromosome {
    /// Creates a chromosome from an explicit gene sequence.
    pub fn new(genes: Vec<Step>) -> Self {
        Self { genes }
    }

    /// Creates a chromosome from a sequence of full step names.
    ///
    /// Fails with [`Error::UnknownStepName`] on the first name absent from
    /// the alphabet.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| Step::from_name(name.as_ref()))
            .collect()
    }

    /// Draws a uniformly random chromosome of the given length.
    pub fn sample<R: Rng>(rng: &mut R, length: usize) -> Self {
        (0..length).map(|_| Step::sample(rng)).collect()
    }

    /// Number of genes. May be zero.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene sequence, in pass order.
    pub fn genes(&self) -> &[Step] {
        &self.genes
    }

    /// The full step names, in pass order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.genes.iter().map(|gene| gene.name()).collect()
    }
}

impl From<Vec<Step>> for Chromosome {
    fn from(genes: Vec<Step>) -> Self {
        Self::new(genes)
    }
}

impl FromIterator<Step> for Chromosome {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for Chromosome {
    type Err = Error;

    /// Decodes the compact encoding, one character per gene.
    ///
    /// Every character must be a step code; whitespace is rejected like any
    /// other unknown character rather than stripped.
    fn from_str(encoded: &str) -> Result<Self> {
        encoded.chars().map(Step::from_code).collect()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{}", gene.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_parse_decodes_each_character() {
        let chromosome: Chromosome = "fcCUnDvejs".parse().unwrap();
        assert_eq!(chromosome.len(), 10);
        assert_eq!(chromosome.genes()[0], Step::CfgSimplification);
        assert_eq!(chromosome.genes()[1], Step::ConstantFolding);
        assert_eq!(chromosome.genes()[9], Step::InstructionSimplification);
    }

    #[test]
    fn test_parse_empty_string_is_empty_chromosome() {
        let chromosome: Chromosome = "".parse().unwrap();
        assert!(chromosome.is_empty());
        assert_eq!(chromosome, Chromosome::default());
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        let result = "fc?d".parse::<Chromosome>();
        assert_eq!(result, Err(Error::UnknownStepCode('?')));
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        let result = "fc d".parse::<Chromosome>();
        assert_eq!(result, Err(Error::UnknownStepCode(' ')));
    }

    #[test]
    fn test_display_round_trips() {
        for encoded in ["", "a", "mgdLu", "fcCUnDvejs", "aaaaaccccc"] {
            let chromosome: Chromosome = encoded.parse().unwrap();
            assert_eq!(chromosome.to_string(), encoded);
        }
    }

    #[test]
    fn test_from_names_matches_parse() {
        let from_names =
            Chromosome::from_names(["mem2reg", "global-value-numbering", "loop-unrolling"])
                .unwrap();
        let parsed: Chromosome = "mgu".parse().unwrap();
        assert_eq!(from_names, parsed);
    }

    #[test]
    fn test_from_names_rejects_unknown() {
        let result = Chromosome::from_names(["mem2reg", "no-such-pass"]);
        assert_eq!(result, Err(Error::UnknownStepName("no-such-pass".into())));
    }

    #[test]
    fn test_step_names_in_pass_order() {
        let chromosome: Chromosome = "mgu".parse().unwrap();
        assert_eq!(
            chromosome.step_names(),
            vec!["mem2reg", "global-value-numbering", "loop-unrolling"]
        );
    }

    #[test]
    fn test_equality_is_structural_and_ordered() {
        let a: Chromosome = "mg".parse().unwrap();
        let b: Chromosome = "mg".parse().unwrap();
        let reversed: Chromosome = "gm".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, reversed);
    }

    #[test]
    fn test_sample_has_requested_length() {
        let mut rng = create_rng(42);
        for length in [0, 1, 13, 100] {
            assert_eq!(Chromosome::sample(&mut rng, length).len(), length);
        }
    }

    #[test]
    fn test_sample_is_reproducible() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        assert_eq!(
            Chromosome::sample(&mut a, 50),
            Chromosome::sample(&mut b, 50)
        );
    }
}
