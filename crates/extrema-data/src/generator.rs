//! Reproducible synthetic sample sequences.

use extrema_config::SampleConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{DataError, Result};

/// Generates uniformly distributed integer samples.
///
/// A seeded generator yields the same sequence on every platform, so a sweep
/// over generated data can be repeated exactly.
///
/// # Example
///
/// ```
/// use extrema_data::SampleGenerator;
///
/// let mut a = SampleGenerator::new(50_000, 5_000_000, Some(7)).unwrap();
/// let mut b = SampleGenerator::new(50_000, 5_000_000, Some(7)).unwrap();
///
/// let samples = a.generate(1000);
/// assert_eq!(samples.len(), 1000);
/// assert_eq!(samples, b.generate(1000));
/// assert!(samples.iter().all(|v| (50_000..=5_000_000).contains(v)));
/// ```
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    min_value: i64,
    max_value: i64,
    rng: ChaCha8Rng,
}

impl SampleGenerator {
    /// Creates a generator for values in `[min_value, max_value]`.
    ///
    /// Without a seed, one is drawn from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidSampleRange`] if `min_value > max_value`.
    pub fn new(min_value: i64, max_value: i64, seed: Option<u64>) -> Result<Self> {
        if min_value > max_value {
            return Err(DataError::InvalidSampleRange {
                min: min_value,
                max: max_value,
            });
        }
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            min_value,
            max_value,
            rng,
        })
    }

    /// Creates a generator from the `[samples]` configuration section.
    pub fn from_config(config: &SampleConfig) -> Result<Self> {
        Self::new(config.min_value, config.max_value, config.seed)
    }

    /// Generates `n` samples.
    pub fn generate(&mut self, n: usize) -> Vec<i64> {
        debug!(
            event = "samples_generated",
            count = n as u64,
            min_value = self.min_value,
            max_value = self.max_value,
        );
        (0..n)
            .map(|_| self.rng.random_range(self.min_value..=self.max_value))
            .collect()
    }
}
