//! Generator construction and the draw primitives used by the operators.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The concrete simulation generator.
///
/// ChaCha8 keeps the draw stream for a given seed portable across platforms
/// and crate versions, unlike `StdRng`, whose algorithm is unspecified.
pub type SimRng = ChaCha8Rng;

/// Creates a seeded generator.
///
/// Two generators created from the same seed produce identical draw streams.
///
/// # Examples
///
/// ```
/// use passevolve::random::{create_rng, Draw};
///
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(a.probability(), b.probability());
/// ```
pub fn create_rng(seed: u64) -> SimRng {
    SimRng::seed_from_u64(seed)
}

/// Draw operations consumed by the genetic operators.
///
/// Each method is a single logical draw and advances the generator state.
/// Implemented for every [`rand::Rng`], so operators stay generic over the
/// generator type while the draw vocabulary stays fixed.
pub trait Draw: Rng {
    /// Uniform draw in `[0.0, 1.0)`.
    ///
    /// A Bernoulli trial with chance `p` is `probability() < p`, which makes
    /// `p = 0.0` never succeed and `p = 1.0` always succeed.
    fn probability(&mut self) -> f64 {
        self.random_range(0.0..1.0)
    }

    /// Uniform draw in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero; an empty range has no uniform draw and a
    /// silent fallback to 0 would corrupt the draw stream.
    fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "index bound must be positive");
        self.random_range(0..bound)
    }
}

impl<R: Rng + ?Sized> Draw for R {}
