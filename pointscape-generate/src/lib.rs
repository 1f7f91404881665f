//! # pointscape-generate
//!
//! Procedural point-cloud generators for pointscape scenes.
//!
//! Three generator families share the same contract: given a target count and
//! shape parameters they synthesize a [`pointscape_core::PointSet`], possibly
//! shorter than requested when rejection filtering applies. Each call is
//! independent (a fresh RNG per invocation), so multiple scenes can be
//! generated in parallel.

pub mod color;
pub mod surface;
pub mod pathways;
pub mod terrain;
pub mod markers;
pub mod scene;

pub use color::*;
pub use surface::*;
pub use pathways::*;
pub use terrain::*;
pub use markers::*;
pub use scene::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the RNG for one generator invocation.
///
/// Seeded runs are reproducible; unseeded runs draw from entropy.
pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
