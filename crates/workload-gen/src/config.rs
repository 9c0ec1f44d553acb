use crate::error::{GenError, Result};
use crate::sampler::Distribution;
use crate::zipfian::MAX_ZIPF_KEYS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_KEY_COUNT: u64 = 10;
pub const DEFAULT_READ_PROPORTION: f64 = 0.5;
pub const DEFAULT_VALUE_LENGTH: usize = 4;
pub const DEFAULT_OPERATIONS: u64 = 1000;
pub const DEFAULT_CLIENT: &str = "./client";

/// One layer of settings, every field optional.
///
/// Used both for a TOML config file and for command-line flags; layers are
/// combined with [`Settings::or`], the receiver taking precedence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub key_count: Option<u64>,
    pub read_proportion: Option<f64>,
    pub value_length: Option<usize>,
    pub distribution: Option<Distribution>,
    pub operations: Option<u64>,
    pub client: Option<String>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GenError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&contents).map_err(|e| match e {
            GenError::Config { message, .. } => GenError::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GenError::Config {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }

    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            key_count: self.key_count.or(fallback.key_count),
            read_proportion: self.read_proportion.or(fallback.read_proportion),
            value_length: self.value_length.or(fallback.value_length),
            distribution: self.distribution.or(fallback.distribution),
            operations: self.operations.or(fallback.operations),
            client: self.client.or(fallback.client),
            seed: self.seed.or(fallback.seed),
        }
    }
}

/// Validated, immutable configuration for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub key_count: u64,
    pub read_proportion: f64,
    pub value_length: usize,
    pub distribution: Distribution,
    pub operations: u64,
    pub client: String,
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl RunConfig {
    /// Apply built-in defaults to `settings` and validate the result.
    pub fn resolve(settings: Settings, output: PathBuf) -> Result<Self> {
        let config = RunConfig {
            key_count: settings.key_count.unwrap_or(DEFAULT_KEY_COUNT),
            read_proportion: settings
                .read_proportion
                .unwrap_or(DEFAULT_READ_PROPORTION),
            value_length: settings.value_length.unwrap_or(DEFAULT_VALUE_LENGTH),
            distribution: settings.distribution.unwrap_or_default(),
            operations: settings.operations.unwrap_or(DEFAULT_OPERATIONS),
            client: settings
                .client
                .unwrap_or_else(|| DEFAULT_CLIENT.to_string()),
            seed: settings.seed,
            output,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.read_proportion) {
            return Err(GenError::ReadProportion(self.read_proportion));
        }
        if self.value_length == 0 {
            return Err(GenError::ValueLength);
        }
        if self.key_count == 0 {
            return Err(GenError::KeyCount);
        }
        if self.distribution == Distribution::Zipf && self.key_count > MAX_ZIPF_KEYS {
            return Err(GenError::ZipfKeyCount {
                key_count: self.key_count,
                max: MAX_ZIPF_KEYS,
            });
        }
        if self.operations == 0 {
            return Err(GenError::Operations);
        }
        if self.client.trim().is_empty() {
            return Err(GenError::Client);
        }
        Ok(())
    }
}
