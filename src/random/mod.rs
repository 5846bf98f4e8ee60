//! Deterministic random-sampling substrate.
//!
//! Every stochastic operator in this crate draws from an explicitly passed
//! generator handle rather than from hidden global state. Reproducing a run
//! therefore means: build a generator from a fixed seed with [`create_rng`],
//! then invoke the same operator sequence on the same inputs. Operators draw
//! in a fixed left-to-right order per invocation, so identical seeds yield
//! identical offspring, byte for byte.
//!
//! [`SimRng`] is ChaCha-based: its stream for a given seed is stable across
//! platforms and releases, which is what seed-pinned search runs and the
//! tests in this crate rely on. It is statistically unbiased but **not**
//! cryptographically secure.
//!
//! For an unseeded, non-reproducible run, seed from ambient entropy:
//!
//! ```
//! use passevolve::random::create_rng;
//!
//! let rng = create_rng(rand::random());
//! ```

mod source;

pub use source::{create_rng, Draw, SimRng};
