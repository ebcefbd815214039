//! Random signature populations
//!
//! The null distribution for significance estimation is a population of
//! direction signatures drawn uniformly from {+1, -1}^n. The generator is
//! injected rather than taken from global state so a fixed seed reproduces
//! the exact population, and with it the exact p-values.

use anyhow::{bail, Result};
use rand::Rng;

use crate::profile::QuerySignature;

/// A population of independent random direction signatures, generated once
/// per estimation run and shared read-only across workers.
#[derive(Debug, Clone)]
pub struct RandomSignaturePopulation {
    signatures: Vec<QuerySignature>,
}

impl RandomSignaturePopulation {
    /// Draw `count` signatures of `length` entries each, every entry an
    /// independent uniform choice in {+1, -1}.
    pub fn generate<R: Rng>(length: usize, count: usize, rng: &mut R) -> Result<Self> {
        if length == 0 {
            bail!("signature length must be positive, got 0");
        }
        if count == 0 {
            bail!("population size must be positive, got 0");
        }
        let signatures = (0..count)
            .map(|_| {
                let signs = (0..length)
                    .map(|_| if rng.gen_bool(0.5) { 1i8 } else { -1i8 })
                    .collect();
                QuerySignature::from_signs(signs)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { signatures })
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn signatures(&self) -> &[QuerySignature] {
        &self.signatures
    }
}
