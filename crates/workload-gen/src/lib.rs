//! Synthetic read/write workload generation.
//!
//! Emits `<client> read keyN` / `<client> write keyN <value>` lines with keys
//! drawn from a uniform or Zipfian (skew 1.2) popularity distribution.

pub mod config;
pub mod emitter;
pub mod error;
pub mod sampler;
pub mod value;
pub mod zipfian;

pub use config::{RunConfig, Settings};
pub use emitter::{generate_file, write_workload, Emitter, Operation, Summary};
pub use error::{GenError, Result};
pub use sampler::{Distribution, KeySampler};
pub use zipfian::ZipfianGenerator;
