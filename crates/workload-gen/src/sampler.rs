use crate::error::{GenError, Result};
use crate::zipfian::{ZipfianGenerator, DEFAULT_SKEW};
use clap::ValueEnum;
use rand::Rng;
use serde::Deserialize;
use std::fmt;

/// Key-popularity distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    #[default]
    Uniform,
    Zipf,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Uniform => f.write_str("uniform"),
            Distribution::Zipf => f.write_str("zipf"),
        }
    }
}

/// Produces key indices in `0..key_count`. Selected once per run.
#[derive(Debug, Clone)]
pub enum KeySampler {
    Uniform { key_count: u64 },
    Zipfian(ZipfianGenerator),
}

impl KeySampler {
    pub fn new(distribution: Distribution, key_count: u64) -> Result<Self> {
        match distribution {
            Distribution::Uniform => Self::uniform(key_count),
            Distribution::Zipf => Ok(Self::Zipfian(ZipfianGenerator::new(
                key_count,
                DEFAULT_SKEW,
            )?)),
        }
    }

    pub fn uniform(key_count: u64) -> Result<Self> {
        if key_count == 0 {
            return Err(GenError::KeyCount);
        }
        Ok(Self::Uniform { key_count })
    }

    pub fn key_count(&self) -> u64 {
        match self {
            Self::Uniform { key_count } => *key_count,
            Self::Zipfian(z) => z.num_items(),
        }
    }

    pub fn next_key<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            Self::Uniform { key_count } => rng.gen_range(0..*key_count),
            Self::Zipfian(z) => z.next_index(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_keys_rejected() {
        assert!(KeySampler::new(Distribution::Uniform, 0).is_err());
        assert!(KeySampler::new(Distribution::Zipf, 0).is_err());
    }

    #[test]
    fn selects_variant() {
        let s = KeySampler::new(Distribution::Zipf, 8).unwrap();
        assert!(matches!(s, KeySampler::Zipfian(_)));
        assert_eq!(s.key_count(), 8);

        let s = KeySampler::new(Distribution::Uniform, 8).unwrap();
        assert!(matches!(s, KeySampler::Uniform { key_count: 8 }));
    }

    #[test]
    fn uniform_is_flat() {
        let sampler = KeySampler::uniform(100).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut counts = [0u32; 100];
        for _ in 0..100_000 {
            let k = sampler.next_key(&mut rng);
            assert!(k < 100);
            counts[k as usize] += 1;
        }
        // Expect ~1000 per key, sigma ~31.
        for (i, &c) in counts.iter().enumerate() {
            assert!((800..=1200).contains(&c), "key {i} drawn {c} times");
        }
    }

    #[test]
    fn zipf_hot_head() {
        let sampler = KeySampler::new(Distribution::Zipf, 100).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0u32; 100];
        for _ in 0..100_000 {
            counts[sampler.next_key(&mut rng) as usize] += 1;
        }
        assert!(counts[0] > 50 * counts[99].max(1));
    }

    #[test]
    fn distribution_names() {
        assert_eq!(Distribution::Uniform.to_string(), "uniform");
        assert_eq!(Distribution::Zipf.to_string(), "zipf");
        assert_eq!(
            Distribution::from_str("zipf", false).unwrap(),
            Distribution::Zipf
        );
        assert!(Distribution::from_str("poisson", false).is_err());
    }
}
