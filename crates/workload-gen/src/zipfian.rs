use crate::error::{GenError, Result};
use rand::Rng;

/// Skew used for every Zipfian run.
pub const DEFAULT_SKEW: f64 = 1.2;

/// Largest key space the cumulative table is built for (128 MiB of `f64`).
pub const MAX_ZIPF_KEYS: u64 = 1 << 24;

/// Zipfian distribution over zero-based key indices `0..num_items`.
///
/// Index `k` has mass `(k + 1)^-skew / Z` where `Z = Σ i^-skew` for
/// `i in 1..=num_items`. The cumulative mass is tabulated once at
/// construction, so a draw is a binary search over the table.
#[derive(Debug, Clone)]
pub struct ZipfianGenerator {
    skew: f64,
    norm: f64,
    cdf: Vec<f64>,
}

impl ZipfianGenerator {
    pub fn new(num_items: u64, skew: f64) -> Result<Self> {
        if num_items == 0 {
            return Err(GenError::KeyCount);
        }
        if num_items > MAX_ZIPF_KEYS {
            return Err(GenError::ZipfKeyCount {
                key_count: num_items,
                max: MAX_ZIPF_KEYS,
            });
        }
        if !skew.is_finite() || skew <= 0.0 {
            return Err(GenError::Skew(skew));
        }

        let norm: f64 = (1..=num_items).map(|i| (i as f64).powf(-skew)).sum();

        let mut running = 0.0;
        let cdf = (1..=num_items)
            .map(|i| {
                running += (i as f64).powf(-skew) / norm;
                running
            })
            .collect();

        Ok(Self { skew, norm, cdf })
    }

    pub fn skew(&self) -> f64 {
        self.skew
    }

    pub fn num_items(&self) -> u64 {
        self.cdf.len() as u64
    }

    /// Normalization constant `Z`.
    pub fn normalization(&self) -> f64 {
        self.norm
    }

    /// Probability mass of a zero-based index; zero outside the domain.
    pub fn probability(&self, index: u64) -> f64 {
        if index >= self.num_items() {
            return 0.0;
        }
        ((index + 1) as f64).powf(-self.skew) / self.norm
    }

    /// Generate the next zero-based index.
    ///
    /// Consumes exactly one `f64` draw from `rng`.
    pub fn next_index<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let r: f64 = rng.gen();
        // First entry whose cumulative mass reaches r. Rounding can leave the
        // last entry just under 1.0, hence the clamp.
        let idx = self.cdf.partition_point(|&c| c < r);
        idx.min(self.cdf.len() - 1) as u64
    }
}
