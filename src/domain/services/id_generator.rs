//! Document-scoped identifier generator
//!
//! Identifiers are drawn uniformly from `0..ID_SPACE` and never handed out
//! twice by the same generator. The random source is injected so tests can
//! seed it.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::errors::ExportError;

/// Size of the identifier namespace (`0 <= id < ID_SPACE`).
pub const ID_SPACE: u32 = 100_000;

/// Random draws attempted before falling back to a linear scan.
const MAX_RANDOM_DRAWS: usize = 64;

/// Issues collision-free identifiers for one document
#[derive(Debug)]
pub struct IdGenerator<R = StdRng> {
    rng: R,
    issued: HashSet<u32>,
}

impl IdGenerator<StdRng> {
    /// Generator backed by an OS-seeded RNG
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator, same seed gives the same id sequence
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IdGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Draw a fresh identifier and mark it as used.
    pub fn next_id(&mut self) -> Result<u32, ExportError> {
        for _ in 0..MAX_RANDOM_DRAWS {
            let candidate = self.rng.gen_range(0..ID_SPACE);
            if self.issued.insert(candidate) {
                return Ok(candidate);
            }
        }

        // Dense namespace: take the lowest free value instead of spinning.
        let candidate = (0..ID_SPACE)
            .find(|id| !self.issued.contains(id))
            .ok_or(ExportError::IdentifierSpaceExhausted { capacity: ID_SPACE })?;
        self.issued.insert(candidate);
        Ok(candidate)
    }

    /// Mark a caller-supplied identifier as used so it is never generated.
    ///
    /// Returns `false` if the identifier was already taken.
    pub fn reserve(&mut self, id: u32) -> bool {
        self.issued.insert(id)
    }

    pub fn is_issued(&self, id: u32) -> bool {
        self.issued.contains(&id)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}
