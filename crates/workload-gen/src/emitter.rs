use crate::config::RunConfig;
use crate::error::{GenError, Result};
use crate::sampler::KeySampler;
use crate::value::random_value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// A single generated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Read { key: u64 },
    Write { key: u64, value: String },
}

impl Operation {
    pub fn key(&self) -> u64 {
        match self {
            Operation::Read { key } | Operation::Write { key, .. } => *key,
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, Operation::Read { .. })
    }

    /// Write the command as one newline-terminated line.
    pub fn write_line<W: Write + ?Sized>(&self, client: &str, out: &mut W) -> io::Result<()> {
        match self {
            Operation::Read { key } => writeln!(out, "{client} read key{key}"),
            Operation::Write { key, value } => writeln!(out, "{client} write key{key} {value}"),
        }
    }
}

/// Counts of what a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub reads: u64,
    pub writes: u64,
}

impl Summary {
    pub fn total(&self) -> u64 {
        self.reads + self.writes
    }
}

/// Drives the read/write mix over a key sampler.
pub struct Emitter<'a> {
    config: &'a RunConfig,
    sampler: KeySampler,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a RunConfig) -> Result<Self> {
        let sampler = KeySampler::new(config.distribution, config.key_count)?;
        if let KeySampler::Zipfian(z) = &sampler {
            tracing::debug!(
                keys = z.num_items(),
                skew = z.skew(),
                norm = z.normalization(),
                "zipf table built"
            );
        }
        Ok(Self { config, sampler })
    }

    pub fn sampler(&self) -> &KeySampler {
        &self.sampler
    }

    /// Draw one operation: op type, then key, then (writes only) the value.
    pub fn next_op<R: Rng + ?Sized>(&self, rng: &mut R) -> Operation {
        let is_read = rng.gen::<f64>() < self.config.read_proportion;
        let key = self.sampler.next_key(rng);
        if is_read {
            Operation::Read { key }
        } else {
            let value = random_value(self.config.value_length, rng);
            Operation::Write { key, value }
        }
    }

    /// Write `config.operations` lines to `out`.
    pub fn emit<W: Write + ?Sized, R: Rng + ?Sized>(
        &self,
        out: &mut W,
        rng: &mut R,
    ) -> io::Result<Summary> {
        let mut summary = Summary::default();
        for _ in 0..self.config.operations {
            let op = self.next_op(rng);
            op.write_line(&self.config.client, out)?;
            if op.is_read() {
                summary.reads += 1;
            } else {
                summary.writes += 1;
            }
        }
        Ok(summary)
    }
}

/// Random source for a run: seeded when requested, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate the whole workload into `config.output`.
///
/// The sampler is built before the file is created, so a bad configuration
/// never truncates an existing file.
pub fn generate_file(config: &RunConfig) -> Result<Summary> {
    let emitter = Emitter::new(config)?;
    let file = File::create(&config.output).map_err(|e| output_error(config, e))?;
    let summary = write_workload(&emitter, BufWriter::new(file))?;

    tracing::info!(
        reads = summary.reads,
        writes = summary.writes,
        output = %config.output.display(),
        "workload written"
    );
    Ok(summary)
}

/// Emit every operation into `out` and flush it.
///
/// A failing sink aborts the run; lines already written stay in place.
pub fn write_workload<W: Write>(emitter: &Emitter<'_>, mut out: W) -> Result<Summary> {
    let config = emitter.config;
    let mut rng = make_rng(config.seed);
    let summary = emitter
        .emit(&mut out, &mut rng)
        .map_err(|e| output_error(config, e))?;
    out.flush().map_err(|e| output_error(config, e))?;
    Ok(summary)
}

fn output_error(config: &RunConfig, source: io::Error) -> GenError {
    GenError::Output {
        path: config.output.clone(),
        source,
    }
}
